use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::weekday::Weekday;

/// First day of the week for territories not listed in `FIRST_DAY_BY_REGION` (CLDR "001").
pub(crate) const DEFAULT_FIRST_DAY: Weekday = Weekday::Monday;

// CLDR supplemental weekData, firstDay. Territories that start on Monday are left out.
const FRIDAY_REGIONS: &[&str] = &["MV"];
const SATURDAY_REGIONS: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];
const SUNDAY_REGIONS: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT",
    "GU", "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO",
    "MT", "MX", "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV",
    "TH", "TT", "TW", "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

lazy_static! {
    static ref FIRST_DAY_BY_REGION: HashMap<&'static str, Weekday> = {
        let mut map = HashMap::new();
        for (regions, day) in [
            (FRIDAY_REGIONS, Weekday::Friday),
            (SATURDAY_REGIONS, Weekday::Saturday),
            (SUNDAY_REGIONS, Weekday::Sunday),
        ] {
            for region in regions {
                map.insert(*region, day);
            }
        }
        map
    };
}

/// The day a territory's week starts on. Unlisted or missing territories start on Monday.
pub(crate) fn first_day_of_week(region: Option<&str>) -> Weekday {
    region
        .and_then(|region| FIRST_DAY_BY_REGION.get(region).copied())
        .unwrap_or(DEFAULT_FIRST_DAY)
}
