use std::fmt::{Debug, Formatter};

/// A partition of `n` into positive parts in non-increasing order.
///
/// Each part is the size of one color class, so the number of parts is the
/// number of colors a coloring of this shape uses.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Partition {
    parts: Vec<usize>,
}

impl Debug for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.parts).finish()
    }
}

impl Partition {
    /// Returns the parts in non-increasing order.
    #[inline(always)]
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// Returns the number of parts.
    #[inline(always)]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns the partitioned integer.
    pub fn sum(&self) -> usize {
        self.parts.iter().sum()
    }

    /// The canonical coloring of this shape: the first `parts[0]` vertices get
    /// color 0, the next `parts[1]` vertices color 1, and so on.
    ///
    /// The result is sorted in ascending order, which makes it the first
    /// arrangement in lexicographic order.
    ///
    /// ```rust
    /// use vertex_coloring::partition::first_partition;
    ///
    /// let partition = first_partition(5, 2);
    /// assert_eq!(partition.parts(), &[4, 1]);
    /// assert_eq!(partition.canonical_coloring(), vec![0, 0, 0, 0, 1]);
    /// ```
    pub fn canonical_coloring(&self) -> Vec<u32> {
        let mut coloring = Vec::with_capacity(self.sum());
        self.fill_canonical_coloring(&mut coloring);
        coloring
    }

    pub(crate) fn fill_canonical_coloring(&self, coloring: &mut Vec<u32>) {
        coloring.clear();
        for (color, &size) in self.parts.iter().enumerate() {
            coloring.extend(std::iter::repeat(color as u32).take(size));
        }
    }
}

/// Returns the first partition of `n` into `parts` parts, `[n - parts + 1, 1, ..., 1]`.
///
/// `parts` is clamped to `1..=n`. The empty partition is returned for `n == 0`.
pub fn first_partition(n: usize, parts: usize) -> Partition {
    if n == 0 {
        return Partition { parts: vec![] };
    }
    let k = parts.clamp(1, n);
    let mut parts = vec![1; k];
    parts[0] = n - (k - 1);
    Partition { parts }
}

/// Returns the successor of `partition` among the partitions of `n`.
///
/// Partitions with the same number of parts are visited in reverse
/// lexicographic order, from `[n - k + 1, 1, ..., 1]` to the most balanced
/// one. After that, the first partition with one more part follows. `None` is
/// returned after `[1, ..., 1]`.
pub fn next_partition(partition: &Partition, n: usize) -> Option<Partition> {
    debug_assert_eq!(partition.sum(), n);
    let k = partition.part_count();
    if k == 0 || k >= n {
        return None;
    }

    let (largest, smallest) = (partition.parts[0], partition.parts[k - 1]);
    // A gap of less than two between the largest and the smallest part means
    // the partition is as balanced as it gets with k parts.
    if largest - smallest < 2 {
        return Some(first_partition(n, k + 1));
    }

    // Find the rightmost part that can hand one unit to the tail on its right
    // such that the tail still fits below it. The tail is then refilled with
    // the largest values first.
    let mut parts = partition.parts.clone();
    let mut tail = 0;
    for j in (1..k).rev() {
        tail += parts[j];
        let cap = parts[j - 1] - 1;
        let slots = k - j;
        if cap == 0 || cap * slots < tail + 1 {
            continue;
        }
        parts[j - 1] = cap;
        let mut remaining = tail + 1;
        for (i, part) in parts[j..].iter_mut().enumerate() {
            let slots_after = slots - i - 1;
            *part = cap.min(remaining - slots_after);
            remaining -= *part;
        }
        debug_assert_eq!(remaining, 0);
        return Some(Partition { parts });
    }
    None
}

/// Iterator over partitions of `n`, in the order of [next_partition].
#[derive(Clone, Debug)]
pub struct Partitions {
    n: usize,
    next: Option<Partition>,
}

impl Partitions {
    /// Iterate over all partitions of `n`, starting with `[n]`.
    pub fn new(n: usize) -> Self {
        Self::starting_at(n, 1)
    }

    /// Iterate over all partitions of `n` with at least `parts` parts.
    pub fn starting_at(n: usize, parts: usize) -> Self {
        Self { n, next: Some(first_partition(n, parts)) }
    }
}

impl Iterator for Partitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = next_partition(&current, self.n);
        Some(current)
    }
}

impl std::iter::FusedIterator for Partitions {}
