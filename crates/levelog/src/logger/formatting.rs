use super::Logger;
use crate::error::Result;
use levelog_sink::{Template, TimeFormat};

impl Logger {
    /// Parses `format` once and installs the result on every sink,
    /// replacing any per-level template.
    ///
    /// The threshold plays no part: discarded levels get the new template as
    /// well. On a parse error nothing changes.
    pub fn set_format(&mut self, format: &str) -> Result<()> {
        let template = Template::parse(format)?;
        self.set_template(&template);
        Ok(())
    }

    /// Installs an already parsed template on every sink.
    pub fn set_template(&mut self, template: &Template) {
        for sink in &mut self.sinks {
            sink.set_template(template.clone());
        }
    }

    /// Returns the time format used for `{Time}`.
    #[must_use]
    pub const fn time_format(&self) -> &TimeFormat {
        &self.time_format
    }

    /// Changes the time format for every subsequent line from any sink.
    pub fn set_time_format(&mut self, time_format: TimeFormat) {
        for sink in &mut self.sinks {
            sink.set_time_format(time_format.clone());
        }
        self.time_format = time_format;
    }
}
