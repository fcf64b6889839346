//! Reference listing of the Two Sum algorithm
//!
//! The Java listing is canonical: [`crate::steps::Step::current_line`] always
//! refers to its line numbers (see [`lines`]). The other display languages
//! carry a hand-maintained table that remaps canonical lines onto their own
//! listing, since e.g. the Python version has no closing braces.

pub mod lines;

use serde::{Deserialize, Serialize};

/// The canonical listing shown to the user
pub const REFERENCE_LISTING: &str = "public int[] twoSum(int[] nums, int target) {
    Map<Integer, Integer> map = new HashMap<>();
    for (int i = 0; i < nums.length; i++) {
        int complement = target - nums[i];
        if (map.containsKey(complement)) {
            return new int[] { map.get(complement), i };
        }
        map.put(nums[i], i);
    }
    return new int[] {};
}";

/// Number of lines in [`REFERENCE_LISTING`]
pub fn total_lines() -> usize {
    REFERENCE_LISTING.lines().count()
}

/// Display language for the code pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
    Python,
    Go,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Java,
        Language::Python,
        Language::Go,
        Language::JavaScript,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Cycle to the next language (wraps around)
    pub fn next(self) -> Self {
        match self {
            Language::Java => Language::Python,
            Language::Python => Language::Go,
            Language::Go => Language::JavaScript,
            Language::JavaScript => Language::Java,
        }
    }
}

/// Listing of the algorithm in one display language
#[derive(Debug)]
pub struct Snippet {
    pub language: Language,
    pub code: &'static str,
    /// `(canonical line, language line)` pairs
    pub line_mapping: &'static [(usize, usize)],
}

impl Snippet {
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}

const IDENTITY: &[(usize, usize)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (5, 5),
    (6, 6),
    (7, 7),
    (8, 8),
    (9, 9),
    (10, 10),
    (11, 11),
];

static JAVA: Snippet = Snippet {
    language: Language::Java,
    code: REFERENCE_LISTING,
    line_mapping: IDENTITY,
};

static PYTHON: Snippet = Snippet {
    language: Language::Python,
    code: "def twoSum(nums: List[int], target: int) -> List[int]:
    hash_map = {}
    for i, num in enumerate(nums):
        complement = target - num
        if complement in hash_map:
            return [hash_map[complement], i]
        hash_map[num] = i
    return []",
    line_mapping: &[
        (1, 1),
        (2, 2),
        (3, 3),
        (4, 4),
        (5, 5),
        (6, 6),
        (7, 7),
        (8, 7),
        (9, 8),
        (10, 8),
        (11, 8),
    ],
};

static GO: Snippet = Snippet {
    language: Language::Go,
    code: "func twoSum(nums []int, target int) []int {
    hashMap := make(map[int]int)
    for i, num := range nums {
        complement := target - num
        if j, ok := hashMap[complement]; ok {
            return []int{j, i}
        }
        hashMap[num] = i
    }
    return []int{}
}",
    line_mapping: IDENTITY,
};

static JAVASCRIPT: Snippet = Snippet {
    language: Language::JavaScript,
    code: "function twoSum(nums, target) {
    const map = new Map();
    for (let i = 0; i < nums.length; i++) {
        const complement = target - nums[i];
        if (map.has(complement)) {
            return [map.get(complement), i];
        }
        map.set(nums[i], i);
    }
    return [];
}",
    line_mapping: IDENTITY,
};

/// Listing for the given language
pub fn snippet(language: Language) -> &'static Snippet {
    match language {
        Language::Java => &JAVA,
        Language::Python => &PYTHON,
        Language::Go => &GO,
        Language::JavaScript => &JAVASCRIPT,
    }
}

/// Translate a canonical line number into `language`'s listing.
///
/// Lines missing from the table are passed through unchanged.
pub fn map_line(canonical: usize, language: Language) -> usize {
    snippet(language)
        .line_mapping
        .iter()
        .find(|(from, _)| *from == canonical)
        .map(|(_, to)| *to)
        .unwrap_or(canonical)
}
