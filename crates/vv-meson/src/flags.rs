//! MSVC compiler and linker flags.

use std::fmt;

use serde::Serialize;

use crate::request::Platform;

/// Debug info, concurrent PDB writes, warnings not fatal, C4189 suppressed.
const BASE_COMPILE: &[&str] = &["/Zi", "/FS", "/WX-", "/wd4189"];
const BASE_LINK: &[&str] = &["/DEBUG"];
const ARM64EC_COMPILE: &[&str] = &["/arm64EC", "-D_AMD64_", "-D_ARM64EC_"];
const ARM64EC_LINK: &[&str] = &["/arm64EC", "/MACHINE:ARM64EC"];

/// An ordered list of flag tokens, joined only when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagList(Vec<&'static str>);

impl FlagList {
    /// A list holding `tokens` in order.
    pub fn new(tokens: &[&'static str]) -> Self {
        Self(tokens.to_vec())
    }

    /// Append `tokens` after the existing ones.
    pub fn extend(&mut self, tokens: &[&'static str]) {
        self.0.extend_from_slice(tokens);
    }

    /// Whether `token` is one of the flags.
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| *t == token)
    }

    /// The flags as discrete tokens.
    pub fn tokens(&self) -> &[&'static str] {
        &self.0
    }

    /// Space-separated form, as Meson expects in `-Dc_args=…`.
    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for FlagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join())
    }
}

/// Per-language compile and link flags handed to Meson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolFlags {
    pub c_args: FlagList,
    pub cpp_args: FlagList,
    pub c_link_args: FlagList,
    pub cpp_link_args: FlagList,
}

impl ToolFlags {
    /// Baseline flags plus the arm64EC additions when building for `arm64ec`.
    pub fn for_platform(platform: Platform) -> Self {
        let mut compile = FlagList::new(BASE_COMPILE);
        let mut link = FlagList::new(BASE_LINK);
        if platform == Platform::Arm64ec {
            compile.extend(ARM64EC_COMPILE);
            link.extend(ARM64EC_LINK);
        }
        Self {
            c_args: compile.clone(),
            cpp_args: compile,
            c_link_args: link.clone(),
            cpp_link_args: link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_flags() {
        let flags = ToolFlags::for_platform(Platform::X64);
        assert_eq!(flags.c_args.join(), "/Zi /FS /WX- /wd4189");
        assert_eq!(flags.cpp_args, flags.c_args);
        assert_eq!(flags.c_link_args.join(), "/DEBUG");
        assert_eq!(flags.cpp_link_args, flags.c_link_args);
    }

    #[test]
    fn arm64ec_appends_defines_and_machine() {
        let flags = ToolFlags::for_platform(Platform::Arm64ec);
        assert_eq!(
            flags.cpp_args.join(),
            "/Zi /FS /WX- /wd4189 /arm64EC -D_AMD64_ -D_ARM64EC_"
        );
        assert_eq!(flags.c_link_args.join(), "/DEBUG /arm64EC /MACHINE:ARM64EC");
        assert!(flags.c_args.contains("-D_ARM64EC_"));
        assert!(flags.cpp_link_args.contains("/MACHINE:ARM64EC"));
        assert_eq!(
            flags.cpp_link_args.tokens(),
            ["/DEBUG", "/arm64EC", "/MACHINE:ARM64EC"]
        );
    }

    #[test]
    fn plain_arm64_has_no_arm64ec_flags() {
        let flags = ToolFlags::for_platform(Platform::Arm64);
        assert!(!flags.c_args.contains("/arm64EC"));
        assert!(!flags.c_link_args.contains("/MACHINE:ARM64EC"));
    }

    #[test]
    fn empty_list_joins_to_empty_string() {
        assert_eq!(FlagList::default().join(), "");
        assert_eq!(FlagList::new(&["/O2"]).to_string(), "/O2");
    }
}
