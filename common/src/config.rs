#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the start-up banner.
    pub no_banner: bool,
    /// Each level silences another layer of decorative output.
    pub quiet: u8,
    /// Prints the fleet commands instead of running them.
    ///
    /// Listing commands still run, the menus need their output.
    pub dry_run: bool,
}

/// Knobs for talking to the fleet-management tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetSettings {
    /// Executable invoked for every fleet operation.
    pub fleet_bin: String,
    /// Account the template's root password belongs to.
    pub admin_user: String,
    /// Hostnames starting with this get the extra tag.
    pub tag_prefix: String,
    /// Value written by the tagging command.
    pub tag: String,
    pub default_netmask: String,
    pub default_gateway: String,
    /// Runbook operators are pointed to before the first prompt.
    pub doc_url: String,
}

pub const DEFAULT_DOC_URL: &str =
    "http://confluence.iaccap.com/display/ITSYS/Chef+-+How+to+create+VMs+from+lvsysinfra1";

impl Default for FleetSettings {
    fn default() -> Self {
        Self {
            fleet_bin: String::from("knife"),
            admin_user: String::from("root"),
            tag_prefix: String::from("lv"),
            tag: String::from("upgrade-hq5"),
            default_netmask: String::from("255.255.255.0"),
            default_gateway: String::from("10.90.0.1"),
            doc_url: String::from(DEFAULT_DOC_URL),
        }
    }
}
