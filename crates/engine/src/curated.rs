// Curated problem table appended to every export

use crate::model::RawRecord;

/// A well-known problem that is always included in the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratedProblem {
    pub number: i64,
    /// "N. Title", same shape as the source sheet.
    pub name: &'static str,
    pub technique: &'static str,
    pub link: &'static str,
}

impl CuratedProblem {
    const fn new(number: i64, name: &'static str, technique: &'static str, link: &'static str) -> Self {
        Self { number, name, technique, link }
    }

    pub fn to_record(&self) -> RawRecord {
        RawRecord {
            problem_number: Some(self.number),
            problem_name: Some(self.name.to_string()),
            technique: Some(self.technique.to_string()),
            completed: None,
            link: Some(self.link.to_string()),
        }
    }
}

/// Grouped roughly by topic. Entries may repeat problems already present in
/// the source sheet; they are not deduplicated.
pub const CURATED: &[CuratedProblem] = &[
    // Array & Hashing
    CuratedProblem::new(1, "1. Two Sum", "Hash Map", "https://leetcode.com/problems/two-sum/"),
    CuratedProblem::new(217, "217. Contains Duplicate", "Hash Set", "https://leetcode.com/problems/contains-duplicate/"),
    CuratedProblem::new(242, "242. Valid Anagram", "Hash Map", "https://leetcode.com/problems/valid-anagram/"),
    CuratedProblem::new(49, "49. Group Anagrams", "Hash Map", "https://leetcode.com/problems/group-anagrams/"),
    CuratedProblem::new(347, "347. Top K Frequent Elements", "Heap / Bucket Sort", "https://leetcode.com/problems/top-k-frequent-elements/"),
    CuratedProblem::new(238, "238. Product of Array Except Self", "Prefix/Suffix Product", "https://leetcode.com/problems/product-of-array-except-self/"),
    CuratedProblem::new(36, "36. Valid Sudoku", "Hash Set", "https://leetcode.com/problems/valid-sudoku/"),
    CuratedProblem::new(128, "128. Longest Consecutive Sequence", "Hash Set", "https://leetcode.com/problems/longest-consecutive-sequence/"),

    // Two Pointers
    CuratedProblem::new(125, "125. Valid Palindrome", "Two Pointers", "https://leetcode.com/problems/valid-palindrome/"),
    CuratedProblem::new(167, "167. Two Sum II - Input Array Is Sorted", "Two Pointers", "https://leetcode.com/problems/two-sum-ii-input-array-is-sorted/"),
    CuratedProblem::new(15, "15. 3Sum", "Two Pointers", "https://leetcode.com/problems/3sum/"),
    CuratedProblem::new(11, "11. Container With Most Water", "Two Pointers", "https://leetcode.com/problems/container-with-most-water/"),
    CuratedProblem::new(42, "42. Trapping Rain Water", "Two Pointers", "https://leetcode.com/problems/trapping-rain-water/"),

    // Sliding Window
    CuratedProblem::new(121, "121. Best Time to Buy and Sell Stock", "Sliding Window", "https://leetcode.com/problems/best-time-to-buy-and-sell-stock/"),
    CuratedProblem::new(3, "3. Longest Substring Without Repeating Characters", "Sliding Window", "https://leetcode.com/problems/longest-substring-without-repeating-characters/"),
    CuratedProblem::new(424, "424. Longest Repeating Character Replacement", "Sliding Window", "https://leetcode.com/problems/longest-repeating-character-replacement/"),
    CuratedProblem::new(567, "567. Permutation in String", "Sliding Window", "https://leetcode.com/problems/permutation-in-string/"),
    CuratedProblem::new(76, "76. Minimum Window Substring", "Sliding Window", "https://leetcode.com/problems/minimum-window-substring/"),
    CuratedProblem::new(239, "239. Sliding Window Maximum", "Deque", "https://leetcode.com/problems/sliding-window-maximum/"),

    // Stack
    CuratedProblem::new(20, "20. Valid Parentheses", "Stack", "https://leetcode.com/problems/valid-parentheses/"),
    CuratedProblem::new(155, "155. Min Stack", "Stack", "https://leetcode.com/problems/min-stack/"),
    CuratedProblem::new(150, "150. Evaluate Reverse Polish Notation", "Stack", "https://leetcode.com/problems/evaluate-reverse-polish-notation/"),
    CuratedProblem::new(22, "22. Generate Parentheses", "Backtracking", "https://leetcode.com/problems/generate-parentheses/"),
    CuratedProblem::new(739, "739. Daily Temperatures", "Monotonic Stack", "https://leetcode.com/problems/daily-temperatures/"),
    CuratedProblem::new(853, "853. Car Fleet", "Stack", "https://leetcode.com/problems/car-fleet/"),
    CuratedProblem::new(84, "84. Largest Rectangle in Histogram", "Monotonic Stack", "https://leetcode.com/problems/largest-rectangle-in-histogram/"),

    // Binary Search
    CuratedProblem::new(704, "704. Binary Search", "Binary Search", "https://leetcode.com/problems/binary-search/"),
    CuratedProblem::new(74, "74. Search a 2D Matrix", "Binary Search", "https://leetcode.com/problems/search-a-2d-matrix/"),
    CuratedProblem::new(875, "875. Koko Eating Bananas", "Binary Search", "https://leetcode.com/problems/koko-eating-bananas/"),
    CuratedProblem::new(153, "153. Find Minimum in Rotated Sorted Array", "Binary Search", "https://leetcode.com/problems/find-minimum-in-rotated-sorted-array/"),
    CuratedProblem::new(33, "33. Search in Rotated Sorted Array", "Binary Search", "https://leetcode.com/problems/search-in-rotated-sorted-array/"),
    CuratedProblem::new(981, "981. Time Based Key-Value Store", "Binary Search", "https://leetcode.com/problems/time-based-key-value-store/"),
    CuratedProblem::new(4, "4. Median of Two Sorted Arrays", "Binary Search", "https://leetcode.com/problems/median-of-two-sorted-arrays/"),

    // Linked List
    CuratedProblem::new(206, "206. Reverse Linked List", "Linked List", "https://leetcode.com/problems/reverse-linked-list/"),
    CuratedProblem::new(21, "21. Merge Two Sorted Lists", "Linked List", "https://leetcode.com/problems/merge-two-sorted-lists/"),
    CuratedProblem::new(143, "143. Reorder List", "Linked List", "https://leetcode.com/problems/reorder-list/"),
    CuratedProblem::new(19, "19. Remove Nth Node From End of List", "Linked List", "https://leetcode.com/problems/remove-nth-node-from-end-of-list/"),
    CuratedProblem::new(138, "138. Copy List with Random Pointer", "Hash Map", "https://leetcode.com/problems/copy-list-with-random-pointer/"),
    CuratedProblem::new(2, "2. Add Two Numbers", "Linked List", "https://leetcode.com/problems/add-two-numbers/"),
    CuratedProblem::new(141, "141. Linked List Cycle", "Two Pointers", "https://leetcode.com/problems/linked-list-cycle/"),
    CuratedProblem::new(287, "287. Find the Duplicate Number", "Floyd's Cycle Detection", "https://leetcode.com/problems/find-the-duplicate-number/"),
    CuratedProblem::new(146, "146. LRU Cache", "Hash Map & DLL", "https://leetcode.com/problems/lru-cache/"),
    CuratedProblem::new(23, "23. Merge k Sorted Lists", "Heap / Merge Sort", "https://leetcode.com/problems/merge-k-sorted-lists/"),
    CuratedProblem::new(25, "25. Reverse Nodes in k-Group", "Linked List", "https://leetcode.com/problems/reverse-nodes-in-k-group/"),

    // Trees
    CuratedProblem::new(226, "226. Invert Binary Tree", "DFS", "https://leetcode.com/problems/invert-binary-tree/"),
    CuratedProblem::new(104, "104. Maximum Depth of Binary Tree", "DFS", "https://leetcode.com/problems/maximum-depth-of-binary-tree/"),
    CuratedProblem::new(543, "543. Diameter of Binary Tree", "DFS", "https://leetcode.com/problems/diameter-of-binary-tree/"),
    CuratedProblem::new(110, "110. Balanced Binary Tree", "DFS", "https://leetcode.com/problems/balanced-binary-tree/"),
    CuratedProblem::new(100, "100. Same Tree", "DFS", "https://leetcode.com/problems/same-tree/"),
    CuratedProblem::new(572, "572. Subtree of Another Tree", "DFS", "https://leetcode.com/problems/subtree-of-another-tree/"),
    CuratedProblem::new(235, "235. Lowest Common Ancestor of a Binary Search Tree", "BST", "https://leetcode.com/problems/lowest-common-ancestor-of-a-binary-search-tree/"),
    CuratedProblem::new(102, "102. Binary Tree Level Order Traversal", "BFS", "https://leetcode.com/problems/binary-tree-level-order-traversal/"),
    CuratedProblem::new(199, "199. Binary Tree Right Side View", "BFS", "https://leetcode.com/problems/binary-tree-right-side-view/"),
    CuratedProblem::new(1448, "1448. Count Good Nodes in Binary Tree", "DFS", "https://leetcode.com/problems/count-good-nodes-in-binary-tree/"),
    CuratedProblem::new(98, "98. Validate Binary Search Tree", "DFS", "https://leetcode.com/problems/validate-binary-search-tree/"),
    CuratedProblem::new(230, "230. Kth Smallest Element in a BST", "DFS In-order", "https://leetcode.com/problems/kth-smallest-element-in-a-bst/"),
    CuratedProblem::new(105, "105. Construct Binary Tree from Preorder and Inorder Traversal", "DFS", "https://leetcode.com/problems/construct-binary-tree-from-preorder-and-inorder-traversal/"),
    CuratedProblem::new(124, "124. Binary Tree Maximum Path Sum", "DFS", "https://leetcode.com/problems/binary-tree-maximum-path-sum/"),
    CuratedProblem::new(297, "297. Serialize and Deserialize Binary Tree", "BFS/DFS", "https://leetcode.com/problems/serialize-and-deserialize-binary-tree/"),

    // Backtracking
    CuratedProblem::new(78, "78. Subsets", "Backtracking", "https://leetcode.com/problems/subsets/"),
    CuratedProblem::new(39, "39. Combination Sum", "Backtracking", "https://leetcode.com/problems/combination-sum/"),
    CuratedProblem::new(46, "46. Permutations", "Backtracking", "https://leetcode.com/problems/permutations/"),
    CuratedProblem::new(90, "90. Subsets II", "Backtracking", "https://leetcode.com/problems/subsets-ii/"),
    CuratedProblem::new(40, "40. Combination Sum II", "Backtracking", "https://leetcode.com/problems/combination-sum-ii/"),
    CuratedProblem::new(79, "79. Word Search", "Backtracking", "https://leetcode.com/problems/word-search/"),
    CuratedProblem::new(131, "131. Palindrome Partitioning", "Backtracking", "https://leetcode.com/problems/palindrome-partitioning/"),
    CuratedProblem::new(17, "17. Letter Combinations of a Phone Number", "Backtracking", "https://leetcode.com/problems/letter-combinations-of-a-phone-number/"),
    CuratedProblem::new(51, "51. N-Queens", "Backtracking", "https://leetcode.com/problems/n-queens/"),

    // Graphs
    CuratedProblem::new(200, "200. Number of Islands", "BFS/DFS", "https://leetcode.com/problems/number-of-islands/"),
    CuratedProblem::new(695, "695. Max Area of Island", "DFS", "https://leetcode.com/problems/max-area-of-island/"),
    CuratedProblem::new(133, "133. Clone Graph", "BFS/DFS", "https://leetcode.com/problems/clone-graph/"),
    CuratedProblem::new(994, "994. Rotting Oranges", "BFS", "https://leetcode.com/problems/rotting-oranges/"),
    CuratedProblem::new(417, "417. Pacific Atlantic Water Flow", "DFS", "https://leetcode.com/problems/pacific-atlantic-water-flow/"),
    CuratedProblem::new(130, "130. Surrounded Regions", "DFS", "https://leetcode.com/problems/surrounded-regions/"),
    CuratedProblem::new(207, "207. Course Schedule", "Topological Sort", "https://leetcode.com/problems/course-schedule/"),
    CuratedProblem::new(210, "210. Course Schedule II", "Topological Sort", "https://leetcode.com/problems/course-schedule-ii/"),
    CuratedProblem::new(684, "684. Redundant Connection", "Union Find", "https://leetcode.com/problems/redundant-connection/"),
    CuratedProblem::new(127, "127. Word Ladder", "BFS", "https://leetcode.com/problems/word-ladder/"),

    // Advanced Graphs
    CuratedProblem::new(1584, "1584. Min Cost to Connect All Points", "Prim's / Kruskal's", "https://leetcode.com/problems/min-cost-to-connect-all-points/"),
    CuratedProblem::new(743, "743. Network Delay Time", "Dijkstra's", "https://leetcode.com/problems/network-delay-time/"),
    CuratedProblem::new(778, "778. Swim in Rising Water", "Dijkstra's", "https://leetcode.com/problems/swim-in-rising-water/"),
    CuratedProblem::new(269, "269. Alien Dictionary", "Topological Sort", "https://leetcode.com/problems/alien-dictionary/"),
    CuratedProblem::new(787, "787. Cheapest Flights Within K Stops", "Bellman-Ford / Dijkstra's", "https://leetcode.com/problems/cheapest-flights-within-k-stops/"),

    // Dynamic Programming
    CuratedProblem::new(70, "70. Climbing Stairs", "DP", "https://leetcode.com/problems/climbing-stairs/"),
    CuratedProblem::new(746, "746. Min Cost Climbing Stairs", "DP", "https://leetcode.com/problems/min-cost-climbing-stairs/"),
    CuratedProblem::new(198, "198. House Robber", "DP", "https://leetcode.com/problems/house-robber/"),
    CuratedProblem::new(213, "213. House Robber II", "DP", "https://leetcode.com/problems/house-robber-ii/"),
    CuratedProblem::new(5, "5. Longest Palindromic Substring", "DP / Two Pointers", "https://leetcode.com/problems/longest-palindromic-substring/"),
    CuratedProblem::new(647, "647. Palindromic Substrings", "DP / Two Pointers", "https://leetcode.com/problems/palindromic-substrings/"),
    CuratedProblem::new(91, "91. Decode Ways", "DP", "https://leetcode.com/problems/decode-ways/"),
    CuratedProblem::new(322, "322. Coin Change", "DP", "https://leetcode.com/problems/coin-change/"),
    CuratedProblem::new(152, "152. Maximum Product Subarray", "DP", "https://leetcode.com/problems/maximum-product-subarray/"),
    CuratedProblem::new(139, "139. Word Break", "DP", "https://leetcode.com/problems/word-break/"),
    CuratedProblem::new(300, "300. Longest Increasing Subsequence", "DP", "https://leetcode.com/problems/longest-increasing-subsequence/"),
    CuratedProblem::new(416, "416. Partition Equal Subset Sum", "DP", "https://leetcode.com/problems/partition-equal-subset-sum/"),

    // 2D DP
    CuratedProblem::new(62, "62. Unique Paths", "DP", "https://leetcode.com/problems/unique-paths/"),
    CuratedProblem::new(1143, "1143. Longest Common Subsequence", "DP", "https://leetcode.com/problems/longest-common-subsequence/"),
    CuratedProblem::new(309, "309. Best Time to Buy and Sell Stock with Cooldown", "DP", "https://leetcode.com/problems/best-time-to-buy-and-sell-stock-with-cooldown/"),
    CuratedProblem::new(518, "518. Coin Change II", "DP", "https://leetcode.com/problems/coin-change-ii/"),
    CuratedProblem::new(494, "494. Target Sum", "DP", "https://leetcode.com/problems/target-sum/"),
    CuratedProblem::new(97, "97. Interleaving String", "DP", "https://leetcode.com/problems/interleaving-string/"),
    CuratedProblem::new(72, "72. Edit Distance", "DP", "https://leetcode.com/problems/edit-distance/"),
    CuratedProblem::new(312, "312. Burst Balloons", "DP", "https://leetcode.com/problems/burst-balloons/"),
    CuratedProblem::new(10, "10. Regular Expression Matching", "DP", "https://leetcode.com/problems/regular-expression-matching/"),

    // Greedy
    CuratedProblem::new(53, "53. Maximum Subarray", "Greedy / Kadane's", "https://leetcode.com/problems/maximum-subarray/"),
    CuratedProblem::new(55, "55. Jump Game", "Greedy", "https://leetcode.com/problems/jump-game/"),
    CuratedProblem::new(45, "45. Jump Game II", "Greedy", "https://leetcode.com/problems/jump-game-ii/"),
    CuratedProblem::new(134, "134. Gas Station", "Greedy", "https://leetcode.com/problems/gas-station/"),
    CuratedProblem::new(846, "846. Hand of Straights", "Greedy / Map", "https://leetcode.com/problems/hand-of-straights/"),
    CuratedProblem::new(1899, "1899. Merge Triplets to Form Target Triplet", "Greedy", "https://leetcode.com/problems/merge-triplets-to-form-target-triplet/"),
    CuratedProblem::new(763, "763. Partition Labels", "Greedy", "https://leetcode.com/problems/partition-labels/"),
    CuratedProblem::new(678, "678. Valid Parenthesis String", "Greedy", "https://leetcode.com/problems/valid-parenthesis-string/"),

    // Intervals
    CuratedProblem::new(57, "57. Insert Interval", "Intervals", "https://leetcode.com/problems/insert-interval/"),
    CuratedProblem::new(56, "56. Merge Intervals", "Intervals", "https://leetcode.com/problems/merge-intervals/"),
    CuratedProblem::new(435, "435. Non-overlapping Intervals", "Intervals", "https://leetcode.com/problems/non-overlapping-intervals/"),
    CuratedProblem::new(252, "252. Meeting Rooms", "Intervals", "https://leetcode.com/problems/meeting-rooms/"),
    CuratedProblem::new(253, "253. Meeting Rooms II", "Intervals", "https://leetcode.com/problems/meeting-rooms-ii/"),
    CuratedProblem::new(1851, "1851. Minimum Interval to Include Each Query", "Intervals / Heap", "https://leetcode.com/problems/minimum-interval-to-include-each-query/"),

    // Math & Geometry
    CuratedProblem::new(48, "48. Rotate Image", "Math", "https://leetcode.com/problems/rotate-image/"),
    CuratedProblem::new(54, "54. Spiral Matrix", "Math", "https://leetcode.com/problems/spiral-matrix/"),
    CuratedProblem::new(73, "73. Set Matrix Zeroes", "Math", "https://leetcode.com/problems/set-matrix-zeroes/"),
    CuratedProblem::new(202, "202. Happy Number", "Math", "https://leetcode.com/problems/happy-number/"),
    CuratedProblem::new(66, "66. Plus One", "Math", "https://leetcode.com/problems/plus-one/"),
    CuratedProblem::new(50, "50. Pow(x, n)", "Math", "https://leetcode.com/problems/powx-n/"),
    CuratedProblem::new(43, "43. Multiply Strings", "Math", "https://leetcode.com/problems/multiply-strings/"),
    CuratedProblem::new(2013, "2013. Detect Squares", "Math / Hash Map", "https://leetcode.com/problems/detect-squares/"),

    // Bit Manipulation
    CuratedProblem::new(136, "136. Single Number", "Bitwise XOR", "https://leetcode.com/problems/single-number/"),
    CuratedProblem::new(191, "191. Number of 1 Bits", "Bitwise AND", "https://leetcode.com/problems/number-of-1-bits/"),
    CuratedProblem::new(338, "338. Counting Bits", "DP / Bitwise", "https://leetcode.com/problems/counting-bits/"),
    CuratedProblem::new(190, "190. Reverse Bits", "Bitwise", "https://leetcode.com/problems/reverse-bits/"),
    CuratedProblem::new(268, "268. Missing Number", "Bitwise XOR / Sum", "https://leetcode.com/problems/missing-number/"),
    CuratedProblem::new(371, "371. Sum of Two Integers", "Bitwise", "https://leetcode.com/problems/sum-of-two-integers/"),
    CuratedProblem::new(7, "7. Reverse Integer", "Math", "https://leetcode.com/problems/reverse-integer/"),
];
