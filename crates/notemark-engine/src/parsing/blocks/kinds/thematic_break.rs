/// Horizontal rule: three or more of the same `-`, `*` or `_`, optionally
/// separated by spaces, and nothing else on the line.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_MARKERS: usize = 3;

    pub fn matches(line: &str) -> bool {
        let mut marker = None;
        let mut count = 0;
        for c in line.chars() {
            match c {
                ' ' | '\t' => {}
                c if Self::MARKERS.contains(&c) && marker.is_none_or(|m| m == c) => {
                    marker = Some(c);
                    count += 1;
                }
                _ => return false,
            }
        }
        count >= Self::MIN_MARKERS
    }
}
