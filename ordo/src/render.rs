//! ASCII tree rendering for heap diagnostics
//!
//! The layout routine walks the implicit binary tree in order, placing each
//! label to the right of its entire left subtree. Even canvas lines hold
//! labels, odd lines hold the `/` and `\` connectors, and underscores on the
//! label line above join each parent to its children.

use ordo_core::{left, right};

/// Default canvas width in characters
pub const DEFAULT_WIDTH: usize = 80;

/// Configuration for tree rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Initial canvas width; the canvas grows when a tree is wider
    pub width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl RenderConfig {
    /// Set the initial canvas width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Growable character grid
struct Canvas {
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn new(height: usize, width: usize) -> Self {
        Self {
            lines: vec![vec![' '; width]; height],
        }
    }

    fn put(&mut self, line: usize, column: usize, ch: char) {
        let Some(line) = self.lines.get_mut(line) else {
            return;
        };
        if column >= line.len() {
            line.resize(column + 1, ' ');
        }
        line[column] = ch;
    }

    /// Lay out the subtree rooted at `index` and return its width
    fn layout(
        &mut self,
        labels: &[String],
        index: usize,
        is_left: bool,
        offset: usize,
        depth: usize,
    ) -> usize {
        if index > labels.len() {
            return 0;
        }

        let label = &labels[index - 1];
        let width = label.chars().count();

        let left_width = self.layout(labels, left(index), true, offset, depth + 1);
        let right_width = self.layout(
            labels,
            right(index),
            false,
            offset + left_width + width,
            depth + 1,
        );

        for (i, ch) in label.chars().enumerate() {
            self.put(2 * depth, offset + left_width + i, ch);
        }

        if depth > 0 && is_left {
            for i in 0..(width + right_width).saturating_sub(1) {
                self.put(2 * depth - 2, offset + left_width + width / 2 + i + 1, '_');
            }
            self.put(2 * depth - 1, offset + left_width + width / 2, '/');
        } else if depth > 0 {
            for i in 0..(left_width + width).saturating_sub(3) {
                if let Some(column) = (offset + i + 1).checked_sub(width / 2) {
                    self.put(2 * depth - 2, column, '_');
                }
            }
            self.put(
                2 * depth - 1,
                (offset + left_width + width / 2).saturating_sub(1),
                '\\',
            );
        }

        left_width + width + right_width
    }

    fn into_lines(self) -> Vec<String> {
        self.lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

/// Render the heap-ordered `labels` (position `i` at `labels[i - 1]`) as a tree
///
/// `depth` is the number of levels in the tree. Returns one string per
/// canvas line with trailing spaces removed.
pub(crate) fn render_tree(labels: &[String], depth: usize, config: &RenderConfig) -> Vec<String> {
    if labels.is_empty() || depth == 0 {
        return Vec::new();
    }

    let mut canvas = Canvas::new(depth * 2 - 1, config.width);
    canvas.layout(labels, 1, false, 0, 0);
    canvas.into_lines()
}
