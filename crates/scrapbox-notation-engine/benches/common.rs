// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_page_content(size: usize) -> String {
    let base = "Daily notes\n[Rust] and [/help/Getting started] #rust #[reading list]\n [* important] see https://doc.rust-lang.org/book/ for more\n  >quoted [avatar https://example.com/u/42] text\n  https://gyazo.com/0123456789abcdef\ncode:main.rs\n fn main() {}\ntable:scores\n\tname\tscore\n[[bold heading]] [ user.icon] [$ e = mc^2]\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unstructured_content(size: usize) -> String {
    let base = "plain prose with hardly any markup, just hashes # and brackets [ that never close, plus the odd http: word\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_unclosed_openers(size: usize) -> String {
    "[* x [[ y # ".repeat(size)
}

#[allow(dead_code)]
pub fn generate_page_lines(size: usize) -> Vec<String> {
    generate_page_content(size)
        .split('\n')
        .map(String::from)
        .collect()
}
