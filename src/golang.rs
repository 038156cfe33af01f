use std::io::{Read, Result, Write};

use crate::constants::BYTE_COLS;

pub fn write_table_header<W>(
    mut writer: W,
    tag_list: &str,
    package_name: &str,
    assets_var_name: &str,
) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "// file generated with embed tool")?;
    writeln!(writer, "// do not edit")?;
    writeln!(writer)?;
    writeln!(writer, "// +build {tag_list}")?;
    writeln!(writer)?;
    writeln!(writer, "package {package_name}")?;
    writeln!(writer, "import \"time\"")?;
    writeln!(writer, "type EmbeddedAsset struct {{")?;
    writeln!(writer, "\tModTime time.Time")?;
    writeln!(writer, "\tBytes []byte")?;
    writeln!(writer, "}}")?;

    // No trailing newline; each asset entry opens with one.
    write!(writer, "var {assets_var_name} = map[string]*EmbeddedAsset{{")?;

    Ok(())
}

pub fn write_table_footer<W>(mut writer: W) -> Result<()>
where
    W: Write,
{
    write!(writer, "\n}}")
}

/// Writes one table entry. Each successful read of `data` becomes one row of
/// `0xHH,` literals; a zero-length read or a read error ends the byte list
/// without a trailing newline.
pub fn write_asset_entry<W, R>(mut writer: W, key: &str, mod_time: i64, mut data: R) -> Result<()>
where
    W: Write,
    R: Read,
{
    writeln!(writer)?;
    writeln!(writer, "{}: &EmbeddedAsset{{", quote(key))?;
    writeln!(writer, "\tModTime: time.Unix({mod_time}, 0),")?;
    writeln!(writer, "\tBytes: []byte{{")?;

    let mut buffer = [0u8; BYTE_COLS];
    loop {
        let read = match data.read(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(read) => read,
        };

        for byte in &buffer[..read] {
            write!(writer, "0x{byte:02x},")?;
        }

        writeln!(writer)?;
    }

    write!(writer, "}}}},")?;

    Ok(())
}

/// Renders `s` as a Go double-quoted string literal.
pub fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');

    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\x07' => quoted.push_str("\\a"),
            '\x08' => quoted.push_str("\\b"),
            '\x0c' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\x0b' => quoted.push_str("\\v"),
            c if c.is_control() && c.is_ascii() => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c if c.is_control() => {
                quoted.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}
