use crate::model::Category;

/// One classification rule: any marker appearing in the lower-cased technique
/// selects `category`, unless the `unless` marker also appears.
struct Rule {
    category: Category,
    markers: &'static [&'static str],
    unless: Option<&'static str>,
}

impl Rule {
    const fn new(category: Category, markers: &'static [&'static str]) -> Self {
        Self { category, markers, unless: None }
    }

    const fn unless(self, marker: &'static str) -> Self {
        Self { unless: Some(marker), ..self }
    }

    fn matches(&self, technique: &str) -> bool {
        if let Some(excluded) = self.unless {
            if technique.contains(excluded) {
                return false;
            }
        }
        self.markers.iter().any(|m| technique.contains(m))
    }
}

/// Evaluated top to bottom; the first match wins. Labels often mention several
/// techniques ("Intervals / Heap", "DFS on Graph"), so the order is significant.
const RULES: &[Rule] = &[
    Rule::new(Category::SlidingWindow, &["sliding window", "deque"]),
    Rule::new(
        Category::TwoPointers,
        &["two pointers", "traverse two sequences", "left ptr", "floyd"],
    ),
    Rule::new(Category::PrefixSum, &["prefix sum", "difference array", "product"]),
    Rule::new(Category::SortingHeap, &["sort", "quick select", "heap", "intervals"]),
    Rule::new(Category::Stack, &["stack", "monotonic stack"]),
    Rule::new(Category::BinarySearch, &["binary search", "bst"]),
    Rule::new(Category::LinkedList, &["linked list", "dll"]),
    Rule::new(Category::Trees, &["tree", "dfs", "bfs"]).unless("graph"),
    Rule::new(
        Category::Graphs,
        &["graph", "topological", "union find", "dijkstra", "bellman"],
    ),
    Rule::new(Category::DynamicProgramming, &["dp", "dynamic programming"]),
    Rule::new(Category::Backtracking, &["backtracking"]),
    Rule::new(Category::Greedy, &["greedy", "kadane"]),
    Rule::new(
        Category::MathBitManipulation,
        &["math", "geometry", "bitwise", "xor"],
    ),
    Rule::new(
        Category::ArrayHashing,
        &[
            "array",
            "traverse",
            "boyer moore",
            "reverse",
            "cyclic sort",
            "hashmap",
            "hashing",
            "continuous elements",
            "swap",
            "permutation",
            "hash set",
        ],
    ),
];

/// Map a free-text technique label to its category.
///
/// Absent or empty labels, and labels no rule recognises, land in
/// [`Category::Other`].
pub fn classify(technique: Option<&str>) -> Category {
    let technique = match technique {
        Some(t) if !t.is_empty() => t.to_lowercase(),
        _ => return Category::Other,
    };

    RULES
        .iter()
        .find(|rule| rule.matches(&technique))
        .map(|rule| rule.category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(technique: &str) -> Category {
        classify(Some(technique))
    }

    #[test]
    fn absent_and_empty_are_other() {
        assert_eq!(classify(None), Category::Other);
        assert_eq!(cat(""), Category::Other);
        assert_eq!(cat("   "), Category::Other);
    }

    #[test]
    fn single_technique_labels() {
        assert_eq!(cat("Sliding Window"), Category::SlidingWindow);
        assert_eq!(cat("Deque"), Category::SlidingWindow);
        assert_eq!(cat("Two Pointers"), Category::TwoPointers);
        assert_eq!(cat("Floyd's Cycle Detection"), Category::TwoPointers);
        assert_eq!(cat("Difference Array"), Category::PrefixSum);
        assert_eq!(cat("Quick Select"), Category::SortingHeap);
        assert_eq!(cat("Intervals"), Category::SortingHeap);
        assert_eq!(cat("Monotonic Stack"), Category::Stack);
        assert_eq!(cat("BST"), Category::BinarySearch);
        assert_eq!(cat("Linked List"), Category::LinkedList);
        assert_eq!(cat("DFS"), Category::Trees);
        assert_eq!(cat("BFS/DFS"), Category::Trees);
        assert_eq!(cat("Union Find"), Category::Graphs);
        assert_eq!(cat("Dijkstra's"), Category::Graphs);
        assert_eq!(cat("DP"), Category::DynamicProgramming);
        assert_eq!(cat("Backtracking"), Category::Backtracking);
        assert_eq!(cat("Greedy / Kadane's"), Category::Greedy);
        assert_eq!(cat("Bitwise XOR"), Category::MathBitManipulation);
        assert_eq!(cat("Boyer Moore Voting"), Category::ArrayHashing);
        assert_eq!(cat("Hash Set"), Category::ArrayHashing);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(cat("SLIDING WINDOW"), Category::SlidingWindow);
        assert_eq!(cat("binary search"), Category::BinarySearch);
    }

    #[test]
    fn graph_excludes_trees() {
        assert_eq!(cat("DFS on Graph"), Category::Graphs);
        assert_eq!(cat("Graph BFS"), Category::Graphs);
        assert_eq!(cat("Tree DFS"), Category::Trees);
    }

    #[test]
    fn earlier_rule_wins() {
        // "sort" is checked before "topological"
        assert_eq!(cat("Topological Sort"), Category::SortingHeap);
        assert_eq!(cat("Min Heap + Intervals"), Category::SortingHeap);
        assert_eq!(cat("Prefix/Suffix Product"), Category::PrefixSum);
        assert_eq!(cat("DLL + HashMap"), Category::LinkedList);
        assert_eq!(cat("Cyclic Sort"), Category::SortingHeap);
        assert_eq!(cat("DP / Two Pointers"), Category::TwoPointers);
    }

    #[test]
    fn unrecognised_labels_are_other() {
        // "hash map" (with a space) is not a marker; "hashmap" is.
        assert_eq!(cat("Hash Map"), Category::Other);
        assert_eq!(cat("Trie"), Category::Other);
        assert_eq!(cat("Various"), Category::Other);
        assert_eq!(cat("Bit Manipulation"), Category::Other);
        assert_eq!(cat("Prim's / Kruskal's"), Category::Other);
    }
}
