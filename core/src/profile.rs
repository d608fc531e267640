use crate::category::CategoryResolver;
use crate::string_normalization::{MISSING, clean_field, norm_key, split_list, title_case};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

pub type ProfileId = String;

/// One source row as handed over by a loader. Every field is optional text;
/// the spreadsheet column names are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default, alias = "Số thứ tự", deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, alias = "Họ và tên", deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, alias = "Ngày sinh", deserialize_with = "lenient_text")]
    pub birth_date: Option<String>,
    #[serde(default, alias = "Giới tính", deserialize_with = "lenient_text")]
    pub gender: Option<String>,
    #[serde(default, alias = "Nơi ở", deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, alias = "Sở thích", deserialize_with = "lenient_text")]
    pub interests: Option<String>,
    #[serde(default, alias = "Lĩnh vực/ngành nghề", deserialize_with = "lenient_text")]
    pub profession: Option<String>,
    #[serde(default, alias = "Tình trạng hôn nhân", deserialize_with = "lenient_text")]
    pub marital_status: Option<String>,
    #[serde(default, alias = "Bạn chung (ID)", deserialize_with = "lenient_text")]
    pub known_connections: Option<String>,
}

/// Accepts a string, an integer, a float or null. Spreadsheet exports give
/// ids as numbers, so `7.0` is read back as `"7"`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(cell.map(|cell| match cell {
        Cell::Text(text) => text,
        Cell::Integer(value) => value.to_string(),
        Cell::Float(value) if value.fract() == 0.0 => format!("{}", value as i64),
        Cell::Float(value) => value.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    id: ProfileId,
    pub name: String,
    pub birth_date: String,
    pub gender: String,
    pub location: String,
    profession: String,
    profession_category: String,
    pub marital_status: String,
    interests: Vec<String>,
    known_connection_ids: Vec<ProfileId>,
    #[serde(skip)]
    interest_keys: BTreeSet<String>,
}

impl Profile {
    /// Builds a profile from a raw record: sentinel normalization, display
    /// casing and profession category resolution.
    pub fn from_record(record: &RawRecord, resolver: &CategoryResolver) -> Self {
        let id = clean_field(record.id.as_deref()).unwrap_or(MISSING).to_string();
        let profession = titled_or_missing(record.profession.as_deref());
        let profession_category = resolver.resolve(&profession).to_string();

        let interests: Vec<String> = clean_field(record.interests.as_deref())
            .map(|raw| {
                split_list(raw, ';')
                    .filter(|tag| norm_key(tag) != MISSING)
                    .map(title_case)
                    .collect()
            })
            .unwrap_or_default();

        let known_connection_ids = clean_field(record.known_connections.as_deref())
            .map(|raw| {
                split_list(raw, ',')
                    .filter(|token| token.chars().all(|c| c.is_ascii_digit()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let interest_keys = interests.iter().map(String::as_str).map(norm_key).collect();

        Self {
            id,
            name: titled_or_missing(record.name.as_deref()),
            birth_date: clean_field(record.birth_date.as_deref())
                .unwrap_or(MISSING)
                .to_string(),
            gender: titled_or_missing(record.gender.as_deref()),
            location: titled_or_missing(record.location.as_deref()),
            profession,
            profession_category,
            marital_status: titled_or_missing(record.marital_status.as_deref()),
            interests,
            known_connection_ids,
            interest_keys,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn profession_category(&self) -> &str {
        &self.profession_category
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Connection ids declared by the source record, before symmetrization.
    pub fn known_connection_ids(&self) -> &[ProfileId] {
        &self.known_connection_ids
    }

    /// Normalized interest tags, the unit of interest comparison.
    pub fn interest_keys(&self) -> &BTreeSet<String> {
        &self.interest_keys
    }

    pub fn has_location(&self) -> bool {
        self.location != MISSING
    }

    pub fn has_profession_category(&self) -> bool {
        self.profession_category != MISSING
    }
}

fn titled_or_missing(raw: Option<&str>) -> String {
    clean_field(raw)
        .map(title_case)
        .unwrap_or_else(|| MISSING.to_string())
}
