//! Arabic lunar mansions (manazil al-qamar), 28 equal ecliptic sectors.
//!
//! The Sun's tropical longitude is approximated from the day offset to the
//! March 21 equinox of the same year, at `360 / 365.25` degrees per day.
//! Dates before the equinox wrap by the length of their own year, so
//! February 29 stays valid.

use cosmo_calendar::{CalendarDate, days_from_civil, days_in_year};
use serde::Serialize;

/// Width of one mansion in degrees.
pub const MANSION_SPAN_DEG: f64 = 360.0 / 28.0;

/// Mean tropical year length used for the day-to-degree conversion.
pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.25;

/// Day and month of the Aries epoch (0 degrees tropical longitude).
pub const ARIES_EPOCH: (u32, u32) = (3, 21);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LunarMansion {
    Sharatain,
    Butain,
    Thurayya,
    Dabaran,
    Haqah,
    Hanah,
    Dhira,
    Nathrah,
    Tarf,
    Jabha,
    Zubra,
    Sarfa,
    Awwa,
    Simak,
    Ghafr,
    Zubana,
    Iklil,
    Qalb,
    Shaulah,
    Naam,
    Baldah,
    SadDhabih,
    SadBula,
    SadSuud,
    SadAkhbiyah,
    FarghMukdim,
    FarghThani,
    BatnHut,
}

/// All 28 mansions in order (0 = Al-Sharatain, 27 = Al-Batn al-Hut).
pub const ALL_LUNAR_MANSIONS: [LunarMansion; 28] = [
    LunarMansion::Sharatain,
    LunarMansion::Butain,
    LunarMansion::Thurayya,
    LunarMansion::Dabaran,
    LunarMansion::Haqah,
    LunarMansion::Hanah,
    LunarMansion::Dhira,
    LunarMansion::Nathrah,
    LunarMansion::Tarf,
    LunarMansion::Jabha,
    LunarMansion::Zubra,
    LunarMansion::Sarfa,
    LunarMansion::Awwa,
    LunarMansion::Simak,
    LunarMansion::Ghafr,
    LunarMansion::Zubana,
    LunarMansion::Iklil,
    LunarMansion::Qalb,
    LunarMansion::Shaulah,
    LunarMansion::Naam,
    LunarMansion::Baldah,
    LunarMansion::SadDhabih,
    LunarMansion::SadBula,
    LunarMansion::SadSuud,
    LunarMansion::SadAkhbiyah,
    LunarMansion::FarghMukdim,
    LunarMansion::FarghThani,
    LunarMansion::BatnHut,
];

impl LunarMansion {
    /// Transliterated Arabic name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sharatain => "Al-Sharatain",
            Self::Butain => "Al-Butain",
            Self::Thurayya => "Al-Thurayya",
            Self::Dabaran => "Aldebaran",
            Self::Haqah => "Al-Haq'ah",
            Self::Hanah => "Al-Han'ah",
            Self::Dhira => "Al-Dhira",
            Self::Nathrah => "Al-Nathrah",
            Self::Tarf => "Al-Tarf",
            Self::Jabha => "Al-Jabha",
            Self::Zubra => "Al-Zubra",
            Self::Sarfa => "Al-Sarfa",
            Self::Awwa => "Al-Awwa",
            Self::Simak => "Al-Simak",
            Self::Ghafr => "Al-Ghafr",
            Self::Zubana => "Al-Zubana",
            Self::Iklil => "Al-Iklil",
            Self::Qalb => "Al-Qalb",
            Self::Shaulah => "Al-Shaulah",
            Self::Naam => "Al-Na'am",
            Self::Baldah => "Al-Baldah",
            Self::SadDhabih => "Sa'd al-Dhabih",
            Self::SadBula => "Sa'd Bula",
            Self::SadSuud => "Sa'd al-Su'ud",
            Self::SadAkhbiyah => "Sa'd al-Akhbiyah",
            Self::FarghMukdim => "Al-Fargh al-Mukdim",
            Self::FarghThani => "Al-Fargh al-Thani",
            Self::BatnHut => "Al-Batn al-Hut",
        }
    }

    /// 0-based index (Al-Sharatain=0 .. Al-Batn al-Hut=27).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [LunarMansion; 28] {
        &ALL_LUNAR_MANSIONS
    }

    pub fn entry(self) -> &'static MansionEntry {
        &ARABIC_MANSIONS[self.index() as usize]
    }

    /// Start of the mansion in tropical longitude, degrees.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * MANSION_SPAN_DEG
    }

    /// Look up by Arabic name or English title (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ARABIC_MANSIONS
            .iter()
            .find(|e| {
                e.arabic_name.eq_ignore_ascii_case(name) || e.mansion.eq_ignore_ascii_case(name)
            })
            .map(|e| e.id)
    }
}

impl Serialize for LunarMansion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MagicalUse {
    #[serde(rename = "use")]
    pub purpose: &'static str,
    pub description: &'static str,
}

/// Reference data for one lunar mansion.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MansionEntry {
    #[serde(skip)]
    pub id: LunarMansion,
    /// English title, e.g. "The Two Signs".
    pub mansion: &'static str,
    pub number: u8,
    pub arabic_name: &'static str,
    pub zodiac_range: &'static str,
    pub key_star: &'static str,
    pub meaning: &'static str,
    pub spiritual_qualities: &'static [&'static str],
    pub description: &'static str,
    pub magical_uses: &'static [MagicalUse],
}

const fn magic(purpose: &'static str, description: &'static str) -> MagicalUse {
    MagicalUse {
        purpose,
        description,
    }
}

pub static ARABIC_MANSIONS: [MansionEntry; 28] = [
    MansionEntry {
        id: LunarMansion::Sharatain,
        mansion: "The Two Signs",
        number: 1,
        arabic_name: "Al-Sharatain",
        zodiac_range: "0° Aries - 12° 51' Aries",
        key_star: "Sheratan",
        meaning: "New Beginnings",
        spiritual_qualities: &["Courage", "Initiative", "Protection", "Healing"],
        description: "The first lunar mansion brings the energy of fresh starts and bold initiatives.",
        magical_uses: &[
            magic("Journeys", "Favorable for starting new journeys and adventures"),
            magic("Medicine", "Good for taking medicine and healing work"),
            magic("Protection", "Offers protection against imprisonment and discord"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Butain,
        mansion: "The Belly",
        number: 2,
        arabic_name: "Al-Butain",
        zodiac_range: "12° 51' Aries - 25° 42' Aries",
        key_star: "—",
        meaning: "Reconciliation",
        spiritual_qualities: &["Peace", "Harmony", "Diplomacy", "Leadership"],
        description: "This mansion brings energy for resolving conflicts and finding common ground.",
        magical_uses: &[
            magic("Reconciliation", "Excellent for making peace and resolving disputes"),
            magic("Favor", "Gain favor from rulers and authorities"),
            magic("Healing", "Good for taking medicine and health matters"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Thurayya,
        mansion: "The Pleiades",
        number: 3,
        arabic_name: "Al-Thurayya",
        zodiac_range: "25° 42' Aries - 8° 34' Taurus",
        key_star: "Alcyone",
        meaning: "Abundance",
        spiritual_qualities: &["Prosperity", "Success", "Achievement", "Fertility"],
        description: "Known as the gateway of abundance, this mansion attracts all good things.",
        magical_uses: &[
            magic("Acquisition", "Attracts wealth and good fortune"),
            magic("Travel", "Favorable for journeys and exploration"),
            magic("Alchemy", "Good for transformation and spiritual work"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Dabaran,
        mansion: "The Follower",
        number: 4,
        arabic_name: "Aldebaran",
        zodiac_range: "8° 34' Taurus - 21° 25' Taurus",
        key_star: "Aldebaran",
        meaning: "Foundation",
        spiritual_qualities: &["Stability", "Building", "Investment", "Strength"],
        description: "This mansion provides the energy for creating solid foundations and lasting structures.",
        magical_uses: &[
            magic("Building", "Excellent for construction and foundation work"),
            magic("Employment", "Good for securing jobs and positions"),
            magic("Investment", "Favorable for long-term financial planning"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Haqah,
        mansion: "The White Spot",
        number: 5,
        arabic_name: "Al-Haq'ah",
        zodiac_range: "21° 25' Taurus - 4° 17' Gemini",
        key_star: "—",
        meaning: "Purity",
        spiritual_qualities: &["Clarity", "Vision", "Insight", "Truth"],
        description: "This mansion brings clarity and helps reveal hidden truths.",
        magical_uses: &[
            magic("Favor", "Gain favor and goodwill from others"),
            magic("Return", "Good for safe return from journeys"),
            magic("Instruction", "Excellent for teaching and learning"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Hanah,
        mansion: "The Brand",
        number: 6,
        arabic_name: "Al-Han'ah",
        zodiac_range: "4° 17' Gemini - 17° 09' Gemini",
        key_star: "—",
        meaning: "Love & Connection",
        spiritual_qualities: &["Love", "Bonds", "Relationship", "Unity"],
        description: "This mansion governs the realm of love, relationships, and emotional bonds.",
        magical_uses: &[
            magic("Love", "Attracts romantic love and partnerships"),
            magic("Hunting", "Successful for pursuing goals"),
            magic("Favor", "Gains benevolence from others"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Dhira,
        mansion: "The Forearm",
        number: 7,
        arabic_name: "Al-Dhira",
        zodiac_range: "17° 09' Gemini - 0° Cancer",
        key_star: "Castor, Pollux",
        meaning: "Spiritual Quest",
        spiritual_qualities: &["Wisdom", "Meditation", "Inspiration", "Reconciliation"],
        description: "This mansion opens pathways to spiritual wisdom and mystical understanding.",
        magical_uses: &[
            magic("Meditation", "Enhances spiritual retreats and meditation"),
            magic("Reconciliation", "Brings peace between conflicting parties"),
            magic("Profit", "Good for commerce and gain"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Nathrah,
        mansion: "The Gap",
        number: 8,
        arabic_name: "Al-Nathrah",
        zodiac_range: "0° Cancer - 12° 51' Cancer",
        key_star: "Praesepe",
        meaning: "Nurturing",
        spiritual_qualities: &["Care", "Protection", "Growth", "Nourishment"],
        description: "This mansion provides nurturing energy for growth and development.",
        magical_uses: &[
            magic("Love", "Strengthens bonds and relationships"),
            magic("Friendship", "Cultivates lasting friendships"),
            magic("Travel", "Protection during journeys"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Tarf,
        mansion: "The Glance",
        number: 9,
        arabic_name: "Al-Tarf",
        zodiac_range: "12° 51' Cancer - 25° 42' Cancer",
        key_star: "—",
        meaning: "Vision",
        spiritual_qualities: &["Insight", "Perception", "Awareness", "Caution"],
        description: "This mansion enhances perception and helps see potential dangers.",
        magical_uses: &[
            magic("Harvest", "Good for reaping what was sown"),
            magic("Favor", "Gain goodwill from travelers"),
            magic("Health", "Recovery and healing"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Jabha,
        mansion: "The Forehead",
        number: 10,
        arabic_name: "Al-Jabha",
        zodiac_range: "25° 42' Cancer - 8° 34' Leo",
        key_star: "Regulus",
        meaning: "Royal Power",
        spiritual_qualities: &["Authority", "Love", "Healing", "Creativity"],
        description: "This mansion channels royal energy for leadership and creative expression.",
        magical_uses: &[
            magic("Love", "Powerful for marriage and partnerships"),
            magic("Healing", "Excellent for health and childbirth"),
            magic("Building", "Good for creating lasting structures"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Zubra,
        mansion: "The Mane",
        number: 11,
        arabic_name: "Al-Zubra",
        zodiac_range: "8° 34' Leo - 21° 25' Leo",
        key_star: "Zosma",
        meaning: "Strength",
        spiritual_qualities: &["Power", "Victory", "Courage", "Achievement"],
        description: "This mansion brings the strength and courage needed for conquest.",
        magical_uses: &[
            magic("Victory", "Success in battle and competition"),
            magic("Authority", "Gain positions of power"),
            magic("Wealth", "Attract material prosperity"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Sarfa,
        mansion: "The Changer",
        number: 12,
        arabic_name: "Al-Sarfa",
        zodiac_range: "21° 25' Leo - 4° 17' Virgo",
        key_star: "—",
        meaning: "Transformation",
        spiritual_qualities: &["Change", "Release", "Letting Go", "Renewal"],
        description: "This mansion governs transitions and the release of old patterns.",
        magical_uses: &[
            magic("Harvest", "Reaping rewards of labor"),
            magic("Partnership", "Creating business alliances"),
            magic("Freedom", "Liberation from captivity"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Awwa,
        mansion: "The Howling Dogs",
        number: 13,
        arabic_name: "Al-Awwa",
        zodiac_range: "4° 17' Virgo - 17° 09' Virgo",
        key_star: "—",
        meaning: "Service",
        spiritual_qualities: &["Devotion", "Duty", "Service", "Protection"],
        description: "This mansion embodies the spirit of service and protective devotion.",
        magical_uses: &[
            magic("Travel", "Safe journeys and voyages"),
            magic("Harvest", "Successful gathering of crops"),
            magic("Partnership", "Strong business relationships"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Simak,
        mansion: "The Unarmed",
        number: 14,
        arabic_name: "Al-Simak",
        zodiac_range: "17° 09' Virgo - 0° Libra",
        key_star: "Spica",
        meaning: "Peace",
        spiritual_qualities: &["Harmony", "Balance", "Trade", "Navigation"],
        description: "This mansion brings peaceful energy favorable for cooperation and trade.",
        magical_uses: &[
            magic("Sailing", "Excellent for maritime activities"),
            magic("Partnership", "Successful collaborations"),
            magic("Love", "Lasting marital bonds"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Ghafr,
        mansion: "The Covering",
        number: 15,
        arabic_name: "Al-Ghafr",
        zodiac_range: "0° Libra - 12° 51' Libra",
        key_star: "—",
        meaning: "Friendship",
        spiritual_qualities: &["Connection", "Alliance", "Trust", "Goodwill"],
        description: "This mansion cultivates lasting friendships and beneficial relationships.",
        magical_uses: &[
            magic("Friendship", "Creating enduring bonds"),
            magic("Travel", "Safe journeys with companions"),
            magic("Harvesting", "Gathering fruits of labor"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Zubana,
        mansion: "The Claws",
        number: 16,
        arabic_name: "Al-Zubana",
        zodiac_range: "12° 51' Libra - 25° 42' Libra",
        key_star: "—",
        meaning: "Balance",
        spiritual_qualities: &["Justice", "Fairness", "Profit", "Commerce"],
        description: "This mansion brings energy for fair trade and balanced exchanges.",
        magical_uses: &[
            magic("Commerce", "Success in buying and selling"),
            magic("Healing", "Recovery from illness"),
            magic("Protection", "Defense against obstacles"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Iklil,
        mansion: "The Crown",
        number: 17,
        arabic_name: "Al-Iklil",
        zodiac_range: "25° 42' Libra - 8° 34' Scorpio",
        key_star: "—",
        meaning: "Achievement",
        spiritual_qualities: &["Success", "Honor", "Cooperation", "Security"],
        description: "This mansion crowns efforts with success and recognition.",
        magical_uses: &[
            magic("Protection", "Guards against thieves"),
            magic("Teamwork", "Successful group efforts"),
            magic("Love", "Strengthening relationships"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Qalb,
        mansion: "The Heart",
        number: 18,
        arabic_name: "Al-Qalb",
        zodiac_range: "8° 34' Scorpio - 21° 25' Scorpio",
        key_star: "Antares",
        meaning: "Deep Emotion",
        spiritual_qualities: &["Passion", "Healing", "Compassion", "Transformation"],
        description: "This mansion opens the heart to deep emotional healing and connection.",
        magical_uses: &[
            magic("Healing", "Powerful for emotional and physical healing"),
            magic("Love", "Deep emotional bonds"),
            magic("Protection", "Defense during conflict"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Shaulah,
        mansion: "The Sting",
        number: 19,
        arabic_name: "Al-Shaulah",
        zodiac_range: "21° 25' Scorpio - 4° 17' Sagittarius",
        key_star: "—",
        meaning: "Power",
        spiritual_qualities: &["Force", "Defense", "Siege", "Obstruction"],
        description: "This mansion provides powerful defensive energy.",
        magical_uses: &[
            magic("Defense", "Protection in siege and conflict"),
            magic("Obstruction", "Blocking harmful influences"),
            magic("Harvest", "Gathering resources"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Naam,
        mansion: "The Ostriches",
        number: 20,
        arabic_name: "Al-Na'am",
        zodiac_range: "4° 17' Sagittarius - 17° 08' Sagittarius",
        key_star: "—",
        meaning: "Freedom",
        spiritual_qualities: &["Liberation", "Speed", "Hunting", "Capture"],
        description: "This mansion brings swift energy for pursuit and capture.",
        magical_uses: &[
            magic("Hunting", "Success in pursuit of goals"),
            magic("Domestication", "Taming wild energies"),
            magic("Protection", "Defense of territory"),
        ],
    },
    MansionEntry {
        id: LunarMansion::Baldah,
        mansion: "The Wasteland",
        number: 21,
        arabic_name: "Al-Baldah",
        zodiac_range: "17° 08' Sagittarius - 0° Capricorn",
        key_star: "Albaldah",
        meaning: "Clearing",
        spiritual_qualities: &["Destruction", "Clearing", "Healing", "Separation"],
        description: "This mansion clears away obstacles to make room for new growth.",
        magical_uses: &[
            magic("Healing", "Clearing illness and disease"),
            magic("Building", "Creating new foundations"),
            magic("Separation", "Ending unhealthy bonds"),
        ],
    },
    MansionEntry {
        id: LunarMansion::SadDhabih,
        mansion: "Fortune of the Slaughterer",
        number: 22,
        arabic_name: "Sa'd al-Dhabih",
        zodiac_range: "0° Capricorn - 12° 51' Capricorn",
        key_star: "—",
        meaning: "Sacrifice & Success",
        spiritual_qualities: &["Victory", "Escape", "Profit", "Perseverance"],
        description: "This mansion brings success through sacrifice and perseverance.",
        magical_uses: &[
            magic("Siege", "Success in difficult situations"),
            magic("Revenge", "Justice and vindication"),
            magic("Divorce", "Ending partnerships"),
        ],
    },
    MansionEntry {
        id: LunarMansion::SadBula,
        mansion: "Fortune of the Swallower",
        number: 23,
        arabic_name: "Sa'd Bula",
        zodiac_range: "12° 51' Capricorn - 25° 42' Capricorn",
        key_star: "—",
        meaning: "Healing",
        spiritual_qualities: &["Recovery", "Cure", "Freedom", "Unity"],
        description: "This mansion swallows illness and brings complete healing.",
        magical_uses: &[
            magic("Healing", "Powerful for curing diseases"),
            magic("Partnership", "Creating lasting bonds"),
            magic("Freedom", "Release from captivity"),
        ],
    },
    MansionEntry {
        id: LunarMansion::SadSuud,
        mansion: "Fortune of Fortunes",
        number: 24,
        arabic_name: "Sa'd al-Su'ud",
        zodiac_range: "25° 42' Capricorn - 8° 34' Aquarius",
        key_star: "—",
        meaning: "Greatest Fortune",
        spiritual_qualities: &["Success", "Victory", "Love", "Prosperity"],
        description: "The luckiest of all mansions, bringing abundant blessings.",
        magical_uses: &[
            magic("Marriage", "Perfect for weddings and unions"),
            magic("Victory", "Success in all endeavors"),
            magic("Friendship", "Lasting beneficial relationships"),
        ],
    },
    MansionEntry {
        id: LunarMansion::SadAkhbiyah,
        mansion: "Fortune of Hidden Things",
        number: 25,
        arabic_name: "Sa'd al-Akhbiyah",
        zodiac_range: "8° 34' Aquarius - 21° 25' Aquarius",
        key_star: "—",
        meaning: "Secrets & Protection",
        spiritual_qualities: &["Mystery", "Protection", "Healing", "Union"],
        description: "This mansion guards secrets and provides hidden protection.",
        magical_uses: &[
            magic("Healing", "Curing hidden ailments"),
            magic("Siege", "Defense of fortifications"),
            magic("Partnership", "Successful alliances"),
        ],
    },
    MansionEntry {
        id: LunarMansion::FarghMukdim,
        mansion: "First Spout",
        number: 26,
        arabic_name: "Al-Fargh al-Mukdim",
        zodiac_range: "21° 25' Aquarius - 4° 17' Pisces",
        key_star: "—",
        meaning: "Flow of Blessings",
        spiritual_qualities: &["Prosperity", "Love", "Unity", "Increase"],
        description: "This mansion pours forth blessings like water from a vessel.",
        magical_uses: &[
            magic("Love", "Union and marital harmony"),
            magic("Victory", "Success over enemies"),
            magic("Freedom", "Liberation from bondage"),
        ],
    },
    MansionEntry {
        id: LunarMansion::FarghThani,
        mansion: "Second Spout",
        number: 27,
        arabic_name: "Al-Fargh al-Thani",
        zodiac_range: "4° 17' Pisces - 17° 09' Pisces",
        key_star: "—",
        meaning: "Continued Flow",
        spiritual_qualities: &["Increase", "Prosperity", "Healing", "Safety"],
        description: "This mansion continues the flow of prosperity and protection.",
        magical_uses: &[
            magic("Increase", "Growth of wealth and goods"),
            magic("Building", "Construction and development"),
            magic("Travel", "Safe journeys by land"),
        ],
    },
    MansionEntry {
        id: LunarMansion::BatnHut,
        mansion: "Belly of the Fish",
        number: 28,
        arabic_name: "Al-Batn al-Hut",
        zodiac_range: "17° 09' Pisces - 0° Aries",
        key_star: "—",
        meaning: "Completion",
        spiritual_qualities: &["Unity", "Increase", "Marriage", "Prosperity"],
        description: "The final mansion completing the cycle, preparing for rebirth.",
        magical_uses: &[
            magic("Marriage", "Perfect for unions and partnerships"),
            magic("Increase", "Growth and multiplication"),
            magic("Healing", "Recovery and restoration"),
        ],
    },
];

/// Result of placing a date among the mansions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MansionPosition {
    pub mansion: LunarMansion,
    /// 0-based mansion index (0..=27).
    pub mansion_index: u8,
    /// Approximate tropical longitude of the Sun, degrees in [0, 360).
    pub tropical_longitude_deg: f64,
    /// Degrees elapsed within the mansion, in [0, 360/28).
    pub degrees_in_mansion: f64,
}

/// Day offset from the Aries epoch of the same year, wrapped into
/// `[0, days_in_year)`.
pub fn days_since_aries_epoch(date: CalendarDate) -> i64 {
    let (epoch_month, epoch_day) = ARIES_EPOCH;
    let offset = days_from_civil(date.year(), date.month(), date.day())
        - days_from_civil(date.year(), epoch_month, epoch_day);
    if offset < 0 {
        offset + i64::from(days_in_year(date.year()))
    } else {
        offset
    }
}

/// Approximate tropical longitude of the Sun for `date`, in degrees.
pub fn tropical_longitude_deg(date: CalendarDate) -> f64 {
    days_since_aries_epoch(date) as f64 * 360.0 / DAYS_PER_TROPICAL_YEAR
}

/// Mansion index for `date`: `floor(longitude / (360/28)) mod 28`.
pub fn mansion_index(date: CalendarDate) -> usize {
    let lon = tropical_longitude_deg(date);
    let idx = (lon / MANSION_SPAN_DEG).floor() as i64;
    idx.rem_euclid(ALL_LUNAR_MANSIONS.len() as i64) as usize
}

/// Place `date` among the mansions with the longitude detail.
pub fn arabic_position(date: CalendarDate) -> MansionPosition {
    let lon = tropical_longitude_deg(date);
    let idx = mansion_index(date);
    let mansion = ALL_LUNAR_MANSIONS[idx];
    MansionPosition {
        mansion,
        mansion_index: idx as u8,
        tropical_longitude_deg: lon,
        degrees_in_mansion: (lon - mansion.start_deg()).max(0.0),
    }
}

/// Classify a date into its lunar mansion.
pub fn arabic_sign(date: CalendarDate) -> &'static MansionEntry {
    let idx = mansion_index(date);
    tracing::trace!(%date, idx, "lunar mansion");
    &ARABIC_MANSIONS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn table_order_matches_enum() {
        for (i, entry) in ARABIC_MANSIONS.iter().enumerate() {
            assert_eq!(entry.id.index() as usize, i);
            assert_eq!(entry.number as usize, i + 1);
            assert_eq!(entry.arabic_name, entry.id.name());
        }
    }

    #[test]
    fn aries_epoch_is_first_mansion() {
        let d = date(2000, 3, 21);
        assert_eq!(mansion_index(d), 0);
        assert_eq!(arabic_sign(d).arabic_name, "Al-Sharatain");
    }

    #[test]
    fn day_before_epoch_is_last_mansion() {
        assert_eq!(mansion_index(date(2001, 3, 20)), 27);
        assert_eq!(mansion_index(date(2000, 3, 20)), 27);
    }

    #[test]
    fn leap_day_is_valid() {
        let d = date(2000, 2, 29);
        let idx = mansion_index(d);
        assert!(idx < 28);
        // 29 Feb 2000 is 21 days before the epoch: offset 345 of 366
        assert_eq!(days_since_aries_epoch(d), 345);
    }

    #[test]
    fn position_detail_consistent() {
        let pos = arabic_position(date(2023, 7, 4));
        assert_eq!(pos.mansion.index(), pos.mansion_index);
        assert!(pos.degrees_in_mansion >= 0.0);
        assert!(pos.degrees_in_mansion < MANSION_SPAN_DEG);
        assert!(pos.tropical_longitude_deg < 360.0);
    }

    #[test]
    fn lookup_by_either_name() {
        assert_eq!(LunarMansion::from_name("the heart"), Some(LunarMansion::Qalb));
        assert_eq!(LunarMansion::from_name("Al-Qalb"), Some(LunarMansion::Qalb));
    }
}
