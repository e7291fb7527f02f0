#![deny(warnings)]
pub mod game;
pub mod model;
pub mod scoring;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "bowlnet"
    }

    pub const fn codename() -> &'static str {
        "Scoresheet Engine"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "bowlnet");
        assert_eq!(AppInfo::codename(), "Scoresheet Engine");
        assert!(!AppInfo::version().is_empty());
    }
}
