// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse grouping derived from a technique label.
///
/// Categories sort by [`Category::label`] text, not by variant position; there
/// is no `Ord` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SlidingWindow,
    TwoPointers,
    PrefixSum,
    SortingHeap,
    Stack,
    BinarySearch,
    LinkedList,
    Trees,
    Graphs,
    DynamicProgramming,
    Backtracking,
    Greedy,
    MathBitManipulation,
    ArrayHashing,
    Other,
}

impl Category {
    /// Text written to the export's `Category` column.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SlidingWindow => "Sliding Window",
            Self::TwoPointers => "Two Pointers",
            Self::PrefixSum => "Prefix Sum",
            Self::SortingHeap => "Sorting & Heap",
            Self::Stack => "Stack",
            Self::BinarySearch => "Binary Search",
            Self::LinkedList => "Linked List",
            Self::Trees => "Trees",
            Self::Graphs => "Graphs",
            Self::DynamicProgramming => "Dynamic Programming",
            Self::Backtracking => "Backtracking",
            Self::Greedy => "Greedy",
            Self::MathBitManipulation => "Math & Bit Manipulation",
            Self::ArrayHashing => "Array & Hashing",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One row as read from the source sheet (or appended by the generator).
///
/// Every field is optional: the source sheet is hand-maintained and rows are
/// frequently partial. Duplicates by `problem_number` are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub problem_number: Option<i64>,
    /// Usually "N. Title".
    pub problem_name: Option<String>,
    pub technique: Option<String>,
    pub completed: Option<bool>,
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One exported row, in export column order.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRecord {
    pub category: Category,
    /// Numeric prefix of the name, or the stringified raw number. Kept as text
    /// because the prefix is not validated.
    pub problem_no: String,
    /// Non-empty links carry exactly one trailing space.
    pub link: Option<String>,
    /// Title with the "N." prefix removed.
    pub problem_name: String,
    pub technique: Option<String>,
    pub completed: Option<bool>,
}
