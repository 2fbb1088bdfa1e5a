//! `vvgen platforms` — list supported target platforms.

use std::fmt::Write;

use vv_meson::{Choice, Platform, ToolFlags};

/// Render the platform table.
pub fn render() -> String {
    let mut out = String::from("Supported platforms:\n\n");
    for &platform in Platform::ALL {
        let flags = ToolFlags::for_platform(platform);
        let _ = writeln!(
            out,
            "  {:<8} arch: {:<6} link: {}",
            platform.as_str(),
            platform.arch(),
            flags.c_link_args
        );
    }
    out.push_str("\nThe developer shell must target the listed arch (-DevCmdArguments '-arch=<arch>').\n");
    out
}

/// Print the platform table.
pub fn run() {
    print!("{}", render());
}
