use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("[{}:{}]", start, end)]
pub struct Span {
    // inclusive range of char offsets
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn one(start: usize) -> Self {
        Span { start, end: start }
    }

    /// Text covered by the span, or an empty string if it runs past the input
    /// (the end-of-input marker does).
    pub fn str_from_source<'a>(&self, input: &'a str) -> &'a str {
        let mut indices = input.char_indices().map(|(i, _)| i).chain([input.len()]);
        let Some(start) = indices.nth(self.start) else {
            return "";
        };
        let end = indices.nth(self.end - self.start).unwrap_or(input.len());
        &input[start..end]
    }

    pub fn to_start_row_col(self, input: &str) -> (usize, usize) {
        let mut row = 1;
        let mut col = 1;
        for c in input.chars().take(self.start) {
            match c {
                '\n' => {
                    row += 1;
                    col = 1;
                }
                _ => {
                    col += 1;
                }
            }
        }
        (row, col)
    }
}
