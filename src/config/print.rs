//! Human-readable dump of the resolved configuration.

use std::io::{self, Write};

use serde::Serialize;

use super::Config;

const DUMP_LABEL: &str = "config:";

impl Config {
    /// Renders the configuration as tab-indented JSON.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes the labelled dump to `sink`. Failures are ignored.
    pub fn write_to<W: Write>(&self, sink: &mut W) {
        if let Ok(rendered) = self.render() {
            let _ = writeln!(sink, "{DUMP_LABEL}\n{rendered}");
        }
    }

    /// Writes the labelled dump to stderr.
    pub fn print(&self) {
        self.write_to(&mut io::stderr().lock());
    }
}
