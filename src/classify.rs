//! Heuristic device-category classification.
//!
//! Maps a manufacturer name (plus optional short name) to at most one
//! category label via an ordered table of case-insensitive patterns.
//! Matching is first-match-wins across labels in declaration order, and
//! within a label across its rule list. The table is immutable,
//! constructed once at first use, and passed around by reference.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// One category with its ordered rule list.
pub struct Category {
    pub label: &'static str,
    rules: Vec<Regex>,
}

impl Category {
    fn matches(&self, haystack: &str) -> bool {
        self.rules.iter().any(|r| r.is_match(haystack))
    }
}

/// Declaration order is matching priority. `asus` appears under both
/// Router (`asus.*router`) and Computer (bare `asus`); Router wins for
/// router-branded names because its label is checked first.
const PATTERN_TABLE: &[(&str, &[&str])] = &[
    // Networking equipment
    (
        "Router",
        &[
            r"cisco",
            r"juniper",
            r"mikrotik",
            r"netgear",
            r"tp-link",
            r"tplink",
            r"linksys",
            r"asus.*router",
            r"dlink",
            r"d-link",
            r"zyxel",
            r"ubiquiti",
            r"aruba",
            r"ruckus",
            r"fortinet",
            r"fortigate",
            r"palo alto",
            r"sonicwall",
            r"watchguard",
            r"barracuda",
            r"peplink",
            r"draytek",
            r"edgerouter",
        ],
    ),
    (
        "Switch",
        &[
            r"switch",
            r"arista",
            r"brocade",
            r"extreme networks",
            r"allied telesis",
            r"3com",
            r"enterasys",
            r"foundry",
            r"mellanox",
        ],
    ),
    (
        "Access Point",
        &[
            r"access point",
            r"wireless.*ap",
            r"wifi.*ap",
            r"unifi",
            r"engenius",
            r"cambium",
            r"meraki",
            r"mist",
            r"aerohive",
            r"xirrus",
            r"mojo",
        ],
    ),
    // Consumer electronics
    (
        "Phone",
        &[
            r"apple",
            r"samsung.*electro",
            r"huawei",
            r"xiaomi",
            r"oppo",
            r"vivo",
            r"oneplus",
            r"realme",
            r"motorola",
            r"nokia.*mobile",
            r"sony.*mobile",
            r"lg electronics",
            r"zte",
            r"tcl",
            r"honor",
            r"google.*pixel",
            r"fairphone",
        ],
    ),
    (
        "Computer",
        &[
            r"dell",
            r"hewlett.*packard",
            r"hp inc",
            r"lenovo",
            r"acer",
            r"asus",
            r"msi",
            r"gigabyte",
            r"intel.*corp",
            r"amd",
            r"nvidia",
            r"microsoft.*corp",
            r"razer",
            r"alienware",
            r"thinkpad",
            r"surface",
        ],
    ),
    ("Laptop", &[r"laptop", r"notebook", r"chromebook"]),
    ("Tablet", &[r"tablet", r"ipad", r"galaxy.*tab"]),
    (
        "TV",
        &[
            r"television",
            r"\btv\b",
            r"vizio",
            r"hisense",
            r"tcl.*electron",
            r"roku",
            r"lg.*display",
            r"sharp.*corp",
            r"philips.*consumer",
            r"toshiba.*visual",
        ],
    ),
    (
        "Gaming",
        &[
            r"sony.*interactive",
            r"playstation",
            r"nintendo",
            r"xbox",
            r"valve",
            r"steam",
            r"corsair",
            r"logitech.*gaming",
            r"hyperx",
            r"steelseries",
        ],
    ),
    (
        "Wearable",
        &[
            r"fitbit",
            r"garmin",
            r"polar",
            r"suunto",
            r"whoop",
            r"oura",
            r"smartwatch",
            r"wearable",
        ],
    ),
    // IoT and smart home
    (
        "IoT",
        &[
            r"espressif",
            r"raspberry.*pi",
            r"arduino",
            r"particle",
            r"seeed",
            r"adafruit",
            r"sparkfun",
            r"nordic.*semi",
            r"silicon.*labs",
            r"texas.*instruments",
            r"microchip",
            r"stmicro",
            r"nxp",
            r"qualcomm",
        ],
    ),
    (
        "Smart Home",
        &[
            r"nest",
            r"ring",
            r"ecobee",
            r"hue",
            r"sonos",
            r"wemo",
            r"smartthings",
            r"tuya",
            r"shelly",
            r"tasmota",
            r"home.*assistant",
            r"z-wave",
            r"zigbee",
            r"amazon.*devices",
            r"echo",
            r"alexa",
            r"google.*home",
            r"lifx",
            r"nanoleaf",
        ],
    ),
    (
        "Camera",
        &[
            r"camera",
            r"hikvision",
            r"dahua",
            r"axis.*comm",
            r"vivotek",
            r"uniview",
            r"hanwha",
            r"bosch.*security",
            r"flir",
            r"amcrest",
            r"reolink",
            r"wyze",
            r"eufy",
            r"arlo",
            r"blink",
            r"gopro",
            r"canon",
            r"nikon",
            r"sony.*imaging",
        ],
    ),
    (
        "Thermostat",
        &[
            r"thermostat",
            r"hvac",
            r"honeywell.*home",
            r"emerson.*climate",
            r"carrier",
            r"trane",
            r"lennox",
        ],
    ),
    (
        "Appliance",
        &[
            r"whirlpool",
            r"electrolux",
            r"bosch.*home",
            r"siemens.*home",
            r"miele",
            r"lg.*appliance",
            r"samsung.*home",
            r"ge.*appliance",
            r"haier",
            r"midea",
            r"dyson",
            r"irobot",
            r"roomba",
            r"roborock",
            r"ecovacs",
        ],
    ),
    // Industrial and enterprise
    (
        "Industrial",
        &[
            r"siemens.*ag",
            r"rockwell",
            r"schneider.*electric",
            r"abb",
            r"honeywell",
            r"emerson.*electric",
            r"yokogawa",
            r"omron",
            r"fanuc",
            r"kuka",
            r"beckhoff",
            r"phoenix.*contact",
            r"wago",
            r"advantech",
            r"moxa",
        ],
    ),
    (
        "Server",
        &[
            r"supermicro",
            r"hpe.*proliant",
            r"ibm.*system",
            r"oracle.*server",
            r"fujitsu.*server",
            r"inspur",
            r"huawei.*server",
            r"quanta",
        ],
    ),
    (
        "Storage",
        &[
            r"netapp",
            r"emc",
            r"pure.*storage",
            r"hitachi.*vantara",
            r"western.*digital",
            r"seagate",
            r"synology",
            r"qnap",
            r"buffalo",
            r"drobo",
        ],
    ),
    // Communication
    (
        "VoIP",
        &[
            r"polycom",
            r"cisco.*phone",
            r"avaya",
            r"mitel",
            r"yealink",
            r"grandstream",
            r"snom",
            r"fanvil",
            r"sangoma",
            r"alcatel.*lucent",
            r"genesys",
        ],
    ),
    (
        "Modem",
        &[
            r"modem",
            r"cable.*modem",
            r"arris",
            r"motorola.*cable",
            r"technicolor",
            r"sagemcom",
            r"zte.*access",
            r"huawei.*access",
        ],
    ),
    // Medical
    (
        "Medical",
        &[
            r"medical",
            r"philips.*healthcare",
            r"ge.*healthcare",
            r"siemens.*health",
            r"medtronic",
            r"baxter",
            r"abbott",
            r"draeger",
            r"hill-rom",
            r"stryker",
            r"fresenius",
            r"dexcom",
            r"masimo",
        ],
    ),
    // Automotive
    (
        "Automotive",
        &[
            r"tesla",
            r"bmw",
            r"mercedes.*benz",
            r"volkswagen",
            r"audi",
            r"ford.*motor",
            r"general.*motors",
            r"toyota",
            r"honda.*motor",
            r"nissan",
            r"hyundai.*motor",
            r"continental.*auto",
            r"bosch.*auto",
            r"denso",
            r"harman",
            r"delphi",
            r"aptiv",
        ],
    ),
    // Printers
    (
        "Printer",
        &[
            r"printer",
            r"canon.*print",
            r"epson",
            r"brother",
            r"lexmark",
            r"xerox",
            r"ricoh",
            r"kyocera",
            r"konica.*minolta",
            r"zebra.*tech",
        ],
    ),
    // Audio / video
    (
        "Audio",
        &[
            r"audio",
            r"bose",
            r"harman.*kardon",
            r"jbl",
            r"bang.*olufsen",
            r"sonos",
            r"sennheiser",
            r"audio-technica",
            r"shure",
            r"yamaha.*audio",
            r"denon",
            r"marantz",
            r"spotify",
        ],
    ),
    (
        "Media Player",
        &[
            r"amazon.*fire",
            r"apple.*tv",
            r"chromecast",
            r"nvidia.*shield",
            r"roku.*player",
            r"streaming",
            r"plex",
            r"kodi",
        ],
    ),
];

static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
    PATTERN_TABLE
        .iter()
        .map(|(label, patterns)| Category {
            label,
            rules: patterns
                .iter()
                .map(|p| {
                    RegexBuilder::new(p)
                        .case_insensitive(true)
                        .build()
                        .expect("static classifier pattern must compile")
                })
                .collect(),
        })
        .collect()
});

/// The full ordered category table.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Classify a manufacturer into a device category.
///
/// Pure and deterministic: the search string is the manufacturer name
/// concatenated with the short name, and the first label with any
/// matching rule wins. Returns `None` when nothing matches.
pub fn classify(manufacturer: &str, short_name: Option<&str>) -> Option<&'static str> {
    if manufacturer.is_empty() {
        return None;
    }
    let haystack = format!("{} {}", manufacturer, short_name.unwrap_or(""));
    CATEGORIES
        .iter()
        .find(|c| c.matches(&haystack))
        .map(|c| c.label)
}
