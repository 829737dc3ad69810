//! Test-only helpers for constructing suite trees.

use crate::core::suite::{Category, TestCase};

/// Category with neither tests nor children.
pub fn category(name: &str) -> Category {
    Category {
        name: name.to_string(),
        description: None,
        tests: Vec::new(),
        children: Vec::new(),
    }
}

/// Category holding leaf tests only.
pub fn category_with_tests(name: &str, tests: Vec<TestCase>) -> Category {
    Category {
        tests,
        ..category(name)
    }
}

/// Category holding child categories only.
pub fn category_with_children(name: &str, children: Vec<Category>) -> Category {
    Category {
        children,
        ..category(name)
    }
}

/// Leaf test without arguments or description.
pub fn test(script: &str) -> TestCase {
    TestCase {
        script: script.to_string(),
        args: None,
        description: None,
    }
}

/// Leaf test with an argument string.
pub fn test_with_args(script: &str, args: &str) -> TestCase {
    TestCase {
        args: Some(args.to_string()),
        ..test(script)
    }
}
