use super::{AliasTable, LoadError, Loader};
use crate::domain::Country;

/// Serves the dataset compiled into the binary; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryLoader;

impl Loader for MemoryLoader {
    fn load_countries(&self) -> Result<Vec<Country>, LoadError> {
        Ok(COUNTRIES
            .iter()
            .map(|(iso2, iso3, name)| Country::new(*iso2, *iso3, *name))
            .collect())
    }

    fn load_aliases(&self) -> Result<AliasTable, LoadError> {
        Ok(ALIASES
            .iter()
            .map(|(code, spellings)| {
                let spellings = spellings.iter().map(|alias| alias.to_string()).collect();
                (code.to_string(), spellings)
            })
            .collect())
    }
}

// (iso2, iso3, English name)
const COUNTRIES: &[(&str, &str, &str)] = &[
    ("AF", "AFG", "Afghanistan"),
    ("AL", "ALB", "Albania"),
    ("DZ", "DZA", "Algeria"),
    ("AD", "AND", "Andorra"),
    ("AO", "AGO", "Angola"),
    ("AG", "ATG", "Antigua and Barbuda"),
    ("AR", "ARG", "Argentina"),
    ("AM", "ARM", "Armenia"),
    ("AU", "AUS", "Australia"),
    ("AT", "AUT", "Austria"),
    ("AZ", "AZE", "Azerbaijan"),
    ("BS", "BHS", "Bahamas"),
    ("BH", "BHR", "Bahrain"),
    ("BD", "BGD", "Bangladesh"),
    ("BB", "BRB", "Barbados"),
    ("BY", "BLR", "Belarus"),
    ("BE", "BEL", "Belgium"),
    ("BZ", "BLZ", "Belize"),
    ("BJ", "BEN", "Benin"),
    ("BT", "BTN", "Bhutan"),
    ("BO", "BOL", "Bolivia (Plurinational State of)"),
    ("BA", "BIH", "Bosnia and Herzegovina"),
    ("BW", "BWA", "Botswana"),
    ("BR", "BRA", "Brazil"),
    ("BN", "BRN", "Brunei Darussalam"),
    ("BG", "BGR", "Bulgaria"),
    ("BF", "BFA", "Burkina Faso"),
    ("BI", "BDI", "Burundi"),
    ("CV", "CPV", "Cabo Verde"),
    ("KH", "KHM", "Cambodia"),
    ("CM", "CMR", "Cameroon"),
    ("CA", "CAN", "Canada"),
    ("CF", "CAF", "Central African Republic"),
    ("TD", "TCD", "Chad"),
    ("CL", "CHL", "Chile"),
    ("CN", "CHN", "China"),
    ("CO", "COL", "Colombia"),
    ("KM", "COM", "Comoros"),
    ("CG", "COG", "Congo"),
    ("CD", "COD", "Congo, Democratic Republic of the"),
    ("CR", "CRI", "Costa Rica"),
    ("CI", "CIV", "Côte d'Ivoire"),
    ("HR", "HRV", "Croatia"),
    ("CU", "CUB", "Cuba"),
    ("CY", "CYP", "Cyprus"),
    ("CZ", "CZE", "Czechia"),
    ("DK", "DNK", "Denmark"),
    ("DJ", "DJI", "Djibouti"),
    ("DM", "DMA", "Dominica"),
    ("DO", "DOM", "Dominican Republic"),
    ("EC", "ECU", "Ecuador"),
    ("EG", "EGY", "Egypt"),
    ("SV", "SLV", "El Salvador"),
    ("GQ", "GNQ", "Equatorial Guinea"),
    ("ER", "ERI", "Eritrea"),
    ("EE", "EST", "Estonia"),
    ("SZ", "SWZ", "Eswatini"),
    ("ET", "ETH", "Ethiopia"),
    ("FJ", "FJI", "Fiji"),
    ("FI", "FIN", "Finland"),
    ("FR", "FRA", "France"),
    ("GA", "GAB", "Gabon"),
    ("GM", "GMB", "Gambia"),
    ("GE", "GEO", "Georgia"),
    ("DE", "DEU", "Germany"),
    ("GH", "GHA", "Ghana"),
    ("GR", "GRC", "Greece"),
    ("GD", "GRD", "Grenada"),
    ("GT", "GTM", "Guatemala"),
    ("GN", "GIN", "Guinea"),
    ("GW", "GNB", "Guinea-Bissau"),
    ("GY", "GUY", "Guyana"),
    ("HT", "HTI", "Haiti"),
    ("VA", "VAT", "Holy See"),
    ("HN", "HND", "Honduras"),
    ("HU", "HUN", "Hungary"),
    ("IS", "ISL", "Iceland"),
    ("IN", "IND", "India"),
    ("ID", "IDN", "Indonesia"),
    ("IR", "IRN", "Iran (Islamic Republic of)"),
    ("IQ", "IRQ", "Iraq"),
    ("IE", "IRL", "Ireland"),
    ("IL", "ISR", "Israel"),
    ("IT", "ITA", "Italy"),
    ("JM", "JAM", "Jamaica"),
    ("JP", "JPN", "Japan"),
    ("JO", "JOR", "Jordan"),
    ("KZ", "KAZ", "Kazakhstan"),
    ("KE", "KEN", "Kenya"),
    ("KI", "KIR", "Kiribati"),
    ("KW", "KWT", "Kuwait"),
    ("KG", "KGZ", "Kyrgyzstan"),
    ("LA", "LAO", "Lao People's Democratic Republic"),
    ("LV", "LVA", "Latvia"),
    ("LB", "LBN", "Lebanon"),
    ("LS", "LSO", "Lesotho"),
    ("LR", "LBR", "Liberia"),
    ("LY", "LBY", "Libya"),
    ("LI", "LIE", "Liechtenstein"),
    ("LT", "LTU", "Lithuania"),
    ("LU", "LUX", "Luxembourg"),
    ("MG", "MDG", "Madagascar"),
    ("MW", "MWI", "Malawi"),
    ("MY", "MYS", "Malaysia"),
    ("MV", "MDV", "Maldives"),
    ("ML", "MLI", "Mali"),
    ("MT", "MLT", "Malta"),
    ("MH", "MHL", "Marshall Islands"),
    ("MR", "MRT", "Mauritania"),
    ("MU", "MUS", "Mauritius"),
    ("MX", "MEX", "Mexico"),
    ("FM", "FSM", "Micronesia (Federated States of)"),
    ("MD", "MDA", "Moldova, Republic of"),
    ("MC", "MCO", "Monaco"),
    ("MN", "MNG", "Mongolia"),
    ("ME", "MNE", "Montenegro"),
    ("MA", "MAR", "Morocco"),
    ("MZ", "MOZ", "Mozambique"),
    ("MM", "MMR", "Myanmar"),
    ("NA", "NAM", "Namibia"),
    ("NR", "NRU", "Nauru"),
    ("NP", "NPL", "Nepal"),
    ("NL", "NLD", "Netherlands"),
    ("NZ", "NZL", "New Zealand"),
    ("NI", "NIC", "Nicaragua"),
    ("NE", "NER", "Niger"),
    ("NG", "NGA", "Nigeria"),
    ("KP", "PRK", "North Korea"),
    ("MK", "MKD", "North Macedonia"),
    ("NO", "NOR", "Norway"),
    ("OM", "OMN", "Oman"),
    ("PK", "PAK", "Pakistan"),
    ("PW", "PLW", "Palau"),
    ("PS", "PSE", "Palestine, State of"),
    ("PA", "PAN", "Panama"),
    ("PG", "PNG", "Papua New Guinea"),
    ("PY", "PRY", "Paraguay"),
    ("PE", "PER", "Peru"),
    ("PH", "PHL", "Philippines"),
    ("PL", "POL", "Poland"),
    ("PT", "PRT", "Portugal"),
    ("PR", "PRI", "Puerto Rico"),
    ("QA", "QAT", "Qatar"),
    ("RO", "ROU", "Romania"),
    ("RU", "RUS", "Russian Federation"),
    ("RW", "RWA", "Rwanda"),
    ("KN", "KNA", "Saint Kitts and Nevis"),
    ("LC", "LCA", "Saint Lucia"),
    ("VC", "VCT", "Saint Vincent and the Grenadines"),
    ("WS", "WSM", "Samoa"),
    ("SM", "SMR", "San Marino"),
    ("ST", "STP", "Sao Tome and Principe"),
    ("SA", "SAU", "Saudi Arabia"),
    ("SN", "SEN", "Senegal"),
    ("RS", "SRB", "Serbia"),
    ("SC", "SYC", "Seychelles"),
    ("SL", "SLE", "Sierra Leone"),
    ("SG", "SGP", "Singapore"),
    ("SK", "SVK", "Slovakia"),
    ("SI", "SVN", "Slovenia"),
    ("SB", "SLB", "Solomon Islands"),
    ("SO", "SOM", "Somalia"),
    ("ZA", "ZAF", "South Africa"),
    ("KR", "KOR", "South Korea"),
    ("SS", "SSD", "South Sudan"),
    ("ES", "ESP", "Spain"),
    ("LK", "LKA", "Sri Lanka"),
    ("SD", "SDN", "Sudan"),
    ("SR", "SUR", "Suriname"),
    ("SE", "SWE", "Sweden"),
    ("CH", "CHE", "Switzerland"),
    ("SY", "SYR", "Syrian Arab Republic"),
    ("TW", "TWN", "Taiwan, Province of China"),
    ("TJ", "TJK", "Tajikistan"),
    ("TZ", "TZA", "Tanzania, United Republic of"),
    ("TH", "THA", "Thailand"),
    ("TL", "TLS", "Timor-Leste"),
    ("TG", "TGO", "Togo"),
    ("TO", "TON", "Tonga"),
    ("TT", "TTO", "Trinidad and Tobago"),
    ("TN", "TUN", "Tunisia"),
    ("TR", "TUR", "Turkey"),
    ("TM", "TKM", "Turkmenistan"),
    ("TV", "TUV", "Tuvalu"),
    ("UG", "UGA", "Uganda"),
    ("UA", "UKR", "Ukraine"),
    ("AE", "ARE", "United Arab Emirates"),
    ("GB", "GBR", "United Kingdom of Great Britain and Northern Ireland"),
    ("US", "USA", "United States of America"),
    ("UY", "URY", "Uruguay"),
    ("UZ", "UZB", "Uzbekistan"),
    ("VU", "VUT", "Vanuatu"),
    ("VE", "VEN", "Venezuela (Bolivarian Republic of)"),
    ("VN", "VNM", "Viet Nam"),
    ("EH", "ESH", "Western Sahara"),
    ("YE", "YEM", "Yemen"),
    ("ZM", "ZMB", "Zambia"),
    ("ZW", "ZWE", "Zimbabwe"),
];

// Colloquial names, other-language names and common misspellings.
const ALIASES: &[(&str, &[&str])] = &[
    (
        "US",
        &[
            "usa", "united states", "america", "états-unis", "vereinigte staaten", "'merica",
            "murica", "united statas", "united stetes", "united staes", "united stets",
            "united staates", "untied states", "estados unidos", "amérique", "u.s.a.", "u.s.a",
            "u.s.", "the states",
        ],
    ),
    (
        "GB",
        &[
            "uk", "united kingdom", "britain", "england", "royaume-uni",
            "vereinigtes königreich", "great britain", "u.k.", "u.k", "northern ireland",
            "scotland", "wales", "écosse", "angleterre",
        ],
    ),
    ("BR", &["brasil", "brasilz", "braszil", "brazyl"]),
    (
        "CN",
        &[
            "chine", "chaina", "chyna", "chinia", "chinna", "chinah", "mainland china", "prc",
            "people's republic of china", "中国",
        ],
    ),
    (
        "KR",
        &[
            "republic of korea", "korea south", "corée du sud", "südkorea", "soth korea",
            "south koria", "hanguk", "rok", "sk", "korea", "대한민국",
        ],
    ),
    (
        "RU",
        &[
            "russia", "russie", "russland", "rossiya", "rossia", "rusia", "rusija", "russa",
            "russha", "soviet union", "ussr", "union of soviet socialist republics", "sovjet",
            "россия",
        ],
    ),
    (
        "DE",
        &[
            "deutschland", "allemagne", "germania", "alemania", "deutchland", "deutchlnd",
            "deutcheland",
        ],
    ),
    (
        "FR",
        &["frankreich", "francia", "francais", "français", "franse", "franc", "francz"],
    ),
    ("IT", &["italia", "italie", "italien", "itly", "itali", "italya"]),
    (
        "ES",
        &[
            "españa", "espagne", "spanien", "spagna", "espanya", "espania", "spane", "spian",
        ],
    ),
    (
        "PL",
        &[
            "polska", "pologne", "polen", "polland", "polan", "p0land", "polend", "polad",
        ],
    ),
    (
        "NL",
        &[
            "nederland", "pays-bas", "niederlande", "holland", "the netherlands",
            "países bajos", "netherland", "neterlands",
        ],
    ),
    (
        "CH",
        &["suisse", "schweiz", "svizzera", "helvetia", "swizerland", "switserland"],
    ),
    ("NO", &["norge", "noreg", "norwey", "norvay"]),
    ("SE", &["sverige", "suède", "schweden", "swden", "sweeden"]),
    (
        "GR",
        &[
            "ελλάδα", "grèce", "griechenland", "grecia", "hellas", "ellada", "grece", "greese",
        ],
    ),
    (
        "RO",
        &[
            "românia", "roumanie", "rumänien", "rumania", "romaña", "romenia", "rominya",
            "roumania", "rominia", "rumeenia", "rumanía",
        ],
    ),
    (
        "HU",
        &["magyarország", "hongrie", "ungarn", "hungria", "hunggary", "hungry"],
    ),
    (
        "CZ",
        &[
            "czech republic", "česká republika", "république tchèque",
            "tschechische republik", "czechoslovakia", "checz", "chekia", "česko",
        ],
    ),
    (
        "SK",
        &["slovensko", "slovaquie", "slowakei", "slovak republic"],
    ),
    ("JP", &["nippon", "nihon", "japon", "jappan", "japn", "日本"]),
    ("IN", &["bharat", "hindustan", "indea", "inida"]),
    (
        "AF",
        &["afganistan", "afganisthan", "afgahnistan", "aghanistan"],
    ),
    ("TR", &["türkiye", "turkiye", "turky", "turkie"]),
    (
        "PH",
        &[
            "philipines", "philipinnes", "phillippines", "the phillipines", "pilipinas",
            "pinoyland",
        ],
    ),
    ("IR", &["iran", "persia", "iraan", "irun"]),
    ("IQ", &["irak", "irac", "irack"]),
    (
        "ZA",
        &["south afrika", "soth africa", "azania", "sa", "rsa"],
    ),
    (
        "AU",
        &["aussie", "oz", "straya", "down under", "austraila", "austalia"],
    ),
    (
        "CA",
        &["canda", "cannada", "canadia", "the great white north"],
    ),
    (
        "NZ",
        &["new zeeland", "new zeland", "kiwiland", "aotearoa"],
    ),
    (
        "MM",
        &["burma", "mianmar", "myanmer", "mayanmar", "myannmar"],
    ),
    ("MX", &["méxico", "méjico", "mexcio", "mecsico"]),
    ("EG", &["misr", "egpyt", "egyt", "eygpt"]),
    ("NG", &["nieria", "nigeira", "naija"]),
    ("AR", &["argetina", "argentia"]),
    ("CO", &["columbia", "colobia", "collombia"]),
    ("TH", &["siam", "tailand", "thialand", "thiland"]),
    ("VN", &["vietnam", "veitnam", "vietnem"]),
    ("ID", &["indonisia", "indonezia"]),
    ("PT", &["portugol", "portugual", "portgual"]),
    (
        "BE",
        &["belgique", "belgië", "belgien", "belguim", "beljum"],
    ),
    (
        "CI",
        &["ivory coast", "ivore coast", "ivri coast", "ivorycoast"],
    ),
    ("AT", &["österreich", "autriche"]),
    ("BG", &["българия", "bulgarie", "bulgarien"]),
    ("HR", &["hrvatska", "croatie", "kroatien"]),
    ("CY", &["κύπρος", "chypre", "zypern"]),
    ("DK", &["danmark", "danemark", "dänemark"]),
    ("EE", &["eesti", "estonie", "estland"]),
    ("FI", &["suomi", "finlande", "finnland"]),
    ("LV", &["latvija", "lettonie", "lettland"]),
    ("LT", &["lietuva", "lituanie", "litauen"]),
    ("LU", &["luxemburg"]),
    ("MT", &["malte"]),
    ("SI", &["slovenija", "slovénie", "slowenien"]),
    ("BA", &["bosnia"]),
    ("MK", &["macedonia"]),
    ("MD", &["moldova", "republic of moldova"]),
    ("IE", &["éire", "irlande", "irland", "éireann"]),
    ("BO", &["bolivia"]),
    ("VE", &["venezuela"]),
    ("SY", &["syria"]),
    ("LA", &["laos"]),
    ("TZ", &["tanzania"]),
    ("TW", &["taiwan"]),
    ("PS", &["palestine"]),
    ("CD", &["dr congo", "drc", "democratic republic of the congo", "congo-kinshasa"]),
    ("CG", &["republic of the congo", "congo-brazzaville"]),
    ("KP", &["dprk", "democratic people's republic of korea"]),
    ("SZ", &["swaziland"]),
    ("CV", &["cape verde"]),
    ("TL", &["east timor"]),
    ("VA", &["vatican", "vatican city"]),
    ("FM", &["micronesia"]),
    ("BN", &["brunei"]),
];
