// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n- Bullet point\n- [ ] Task item\n- [x] Done item\n\n> Quoted *line*\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

/// Legacy editor output: one `<div>` per line.
#[allow(dead_code)]
pub fn generate_legacy_divs(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        match i % 4 {
            0 => content.push_str(&format!("<div>- item {i}</div>")),
            1 => content.push_str("<div><br></div>"),
            2 => content.push_str(&format!("<div>plain line {i} &amp; more</div>")),
            _ => content.push_str(&format!("<div>**bold {i}**</div>")),
        }
    }
    content
}

/// Keystrokes that exercise every promotion path.
#[allow(dead_code)]
pub fn generate_typing_script(repeats: usize) -> String {
    let base = "# Heading\nsome **bold** and *soft* and `code` and ~~gone~~\n- [ ] task\nnext\n\n> quote\n\n```\nlet x = 1;\n```\n---\n";
    base.repeat(repeats)
}
