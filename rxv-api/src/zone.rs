/// Top-level sections of the YAMAHA_AV document a command can address
///
/// Each command payload is wrapped in exactly one zone element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Main zone - power, volume, mute and input of the primary room
    MainZone,

    /// System section - unit configuration such as the model name
    System,
}

impl Zone {
    /// Element name of this zone on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            Zone::MainZone => "Main_Zone",
            Zone::System => "System",
        }
    }

    /// Wrap an inner payload in this zone's element
    pub fn wrap(&self, inner: &str) -> String {
        format!("<{tag}>{inner}</{tag}>", tag = self.tag(), inner = inner)
    }
}
