//! Shell rendering of the final command line.

use std::borrow::Cow;
use std::path::Path;

use serde::Serialize;

/// Command that consumes the rendered arguments.
pub const MESON_SETUP: &str = "meson setup";

/// Wrap `arg` in single quotes if it contains a space.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if arg.contains(' ') {
        Cow::Owned(format!("'{arg}'"))
    } else {
        Cow::Borrowed(arg)
    }
}

/// A copy/paste-ready pair of shell lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// `cd <working directory>`.
    pub cd: String,
    /// `meson setup <args…>`.
    pub setup: String,
}

impl Invocation {
    pub fn lines(&self) -> [&str; 2] {
        [&self.cd, &self.setup]
    }
}

/// Render `args` as a `meson setup` command run from `cwd`.
pub fn render_invocation<S: AsRef<str>>(cwd: &Path, args: &[S]) -> Invocation {
    let quoted: Vec<Cow<'_, str>> = args.iter().map(|a| quote_arg(a.as_ref())).collect();
    Invocation {
        cd: format!("cd {}", cwd.display()),
        setup: format!("{MESON_SETUP} {}", quoted.join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_space_present() {
        assert_eq!(quote_arg("-Dwerror=false"), "-Dwerror=false");
        assert_eq!(
            quote_arg("-Dc_link_args=/DEBUG /arm64EC"),
            "'-Dc_link_args=/DEBUG /arm64EC'"
        );
        assert_eq!(quote_arg("-Dvideo-codecs="), "-Dvideo-codecs=");
        // Tabs are left alone; only spaces trigger quoting.
        assert_eq!(quote_arg("a\tb"), "a\tb");
    }

    #[test]
    fn renders_cd_and_setup() {
        let inv = render_invocation(
            Path::new("/src/mesa"),
            &["build/vv_x64_release", ".", "-Dc_args=/Zi /FS"],
        );
        assert_eq!(inv.cd, "cd /src/mesa");
        assert_eq!(
            inv.setup,
            "meson setup build/vv_x64_release . '-Dc_args=/Zi /FS'"
        );
        assert_eq!(inv.lines(), ["cd /src/mesa", inv.setup.as_str()]);
    }
}
