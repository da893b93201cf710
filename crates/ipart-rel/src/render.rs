use std::fmt;

use crate::matrix::RelationMatrix;

const CORNER: &str = "A \\ A";

/// Renders a titled matrix with element labels on both axes.
pub fn render_matrix(title: &str, matrix: &RelationMatrix) -> String {
    MatrixTable { title, matrix }.to_string()
}

struct MatrixTable<'a> {
    title: &'a str,
    matrix: &'a RelationMatrix,
}

impl fmt::Display for MatrixTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if self.matrix.is_empty() {
            return writeln!(f, "(empty set A)");
        }
        let label_width = self
            .matrix
            .elements()
            .iter()
            .map(|element| element.chars().count())
            .max()
            .unwrap_or(0)
            .max(CORNER.len());

        write!(f, "{CORNER:<label_width$}")?;
        for element in self.matrix.elements() {
            write!(f, "  {element:^label_width$}")?;
        }
        writeln!(f)?;
        for (element, row) in self.matrix.elements().iter().zip(self.matrix.rows()) {
            write!(f, "{element:<label_width$}")?;
            for cell in row {
                write!(f, "  {cell:^label_width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Summary line printed under the two matrices.
pub fn status_line(matrix: &RelationMatrix) -> String {
    format!(
        "|A| = {}; Pairs used = {}; p⁻¹ equals transpose(p).",
        matrix.len(),
        matrix.pair_count()
    )
}
