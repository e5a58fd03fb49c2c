/// Bare and bracketed web addresses.
pub struct Url;

impl Url {
    pub const SCHEMES: [&'static str; 2] = ["http://", "https://"];

    /// Bytes that end a bare URL.
    pub const TERMINATORS: [u8; 3] = [b' ', b'\t', b'\n'];

    /// Returns the byte offset of the first `http://` or `https://` in `s`.
    pub fn find_scheme(s: &str) -> Option<usize> {
        Self::SCHEMES.iter().filter_map(|scheme| s.find(scheme)).min()
    }
}
