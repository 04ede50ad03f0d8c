pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn br() -> &'static str {
        "BR"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn india() -> &'static str {
        "IN"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// A region code string representing the "unknown" region.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}
