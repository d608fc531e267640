use crate::string_normalization::{MISSING, norm_key};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

/// Built-in interest groups: group name followed by its member tags.
pub const DEFAULT_INTEREST_GROUPS: &[(&str, &[&str])] = &[
    ("Sáng tạo", &["Vẽ tranh", "Chụp ảnh", "Viết lách", "Làm đồ thủ công"]),
    ("Giải trí", &["Nghe nhạc", "Xem phim", "Chơi nhạc cụ", "Chơi game"]),
    (
        "Vận động",
        &["Tập gym", "Yoga", "Chạy bộ", "Đi bộ", "Đạp xe", "Bơi lội"],
    ),
    (
        "Thư giãn",
        &["Đọc sách", "Thiền định", "Làm vườn", "Nấu ăn", "Làm bánh"],
    ),
    (
        "Khám phá",
        &[
            "Du lịch",
            "Học ngoại ngữ",
            "Khám phá ẩm thực",
            "Tham gia hoạt động tình nguyện",
        ],
    ),
];

pub type InterestGroups = IndexMap<String, Vec<String>>;

/// Interest groups keyed by name, each holding the normalized member tags.
/// Group order is the order the bonus scan walks.
#[derive(Debug, Clone)]
pub struct InterestTaxonomy {
    groups: IndexMap<String, Vec<String>>,
    normalized: Vec<FxHashSet<String>>,
}

impl InterestTaxonomy {
    pub fn new(groups: InterestGroups) -> Self {
        let normalized = groups
            .values()
            .map(|members| {
                members
                    .iter()
                    .map(|member| norm_key(member))
                    .filter(|key| key != MISSING)
                    .collect()
            })
            .collect();

        Self { groups, normalized }
    }

    /// Built-in groups extended with `supplement`. Unknown groups are
    /// appended in order; known groups gain the members they lack.
    pub fn merged(supplement: &InterestGroups) -> Self {
        let mut groups: InterestGroups = DEFAULT_INTEREST_GROUPS
            .iter()
            .map(|(name, members)| {
                let members = members.iter().map(|m| m.to_string()).collect();
                (name.to_string(), members)
            })
            .collect();

        for (name, extra) in supplement {
            let members = groups.entry(name.clone()).or_default();
            for member in extra {
                if !members.contains(member) {
                    members.push(member.clone());
                }
            }
        }

        Self::new(groups)
    }

    pub fn groups(&self) -> &InterestGroups {
        &self.groups
    }

    /// Normalized member sets in scan order.
    pub fn member_sets(&self) -> impl Iterator<Item = &FxHashSet<String>> {
        self.normalized.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Default for InterestTaxonomy {
    fn default() -> Self {
        Self::merged(&InterestGroups::new())
    }
}

/// Treats distinct location labels as the same region.
#[derive(Debug, Clone, Default)]
pub struct LocationEquivalence {
    label_to_region: FxHashMap<String, String>,
}

impl LocationEquivalence {
    pub fn new<I, L, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
        L: AsRef<str>,
        R: Into<String>,
    {
        let label_to_region = entries
            .into_iter()
            .map(|(label, region)| (norm_key(label.as_ref()), region.into()))
            .filter(|(key, _)| key != MISSING)
            .collect();

        Self { label_to_region }
    }

    pub fn region_of(&self, location: &str) -> Option<&str> {
        let key = norm_key(location);
        if key == MISSING {
            return None;
        }
        self.label_to_region.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.label_to_region.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_to_region.is_empty()
    }
}
