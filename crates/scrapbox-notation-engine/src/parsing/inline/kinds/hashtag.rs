pub struct Hashtag;

impl Hashtag {
    pub const HASH: &'static str = "#";
}
