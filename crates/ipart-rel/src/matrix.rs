use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 0/1 matrix of a binary relation over an ordered element list.
///
/// Row `i`, column `j` is 1 when `(elements[i], elements[j])` is in the
/// relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationMatrix {
    elements: Vec<String>,
    cells: Vec<Vec<u8>>,
}

impl RelationMatrix {
    /// Builds the matrix of `pairs` over `elements`.
    ///
    /// Pairs mentioning an element outside the list are skipped. When an
    /// element is listed twice its first position is used.
    pub fn build(elements: &[String], pairs: &[(String, String)]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(elements.len());
        for (position, element) in elements.iter().enumerate() {
            index.entry(element.as_str()).or_insert(position);
        }
        let size = elements.len();
        let mut cells = vec![vec![0u8; size]; size];
        for (x, y) in pairs {
            if let (Some(&row), Some(&col)) = (index.get(x.as_str()), index.get(y.as_str())) {
                cells[row][col] = 1;
            }
        }
        Self {
            elements: elements.to_vec(),
            cells,
        }
    }

    /// Matrix of the inverse relation.
    pub fn transpose(&self) -> Self {
        let size = self.elements.len();
        let cells = (0..size)
            .map(|col| (0..size).map(|row| self.cells[row][col]).collect())
            .collect();
        Self {
            elements: self.elements.clone(),
            cells,
        }
    }

    /// Ordered element labels shared by rows and columns.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Matrix rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    /// Cell value at `(row, col)`, or `None` outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Number of related pairs.
    pub fn pair_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == 1).count())
            .sum()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true for the matrix over the empty set.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns true when the relation equals its inverse.
    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }
}
