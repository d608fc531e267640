use crate::string_normalization::{MISSING, norm_key};
use rustc_hash::FxHashMap;

/// Category assigned to a profession no table entry matches.
pub const UNCLASSIFIED: &str = MISSING;

/// Built-in profession taxonomy: category followed by its member labels.
pub const DEFAULT_PROFESSION_GROUPS: &[(&str, &[&str])] = &[
    ("Sinh viên", &["Sinh viên"]),
    (
        "Công nghệ & Kỹ thuật",
        &[
            "Công nghệ thông tin",
            "Kỹ thuật phần mềm",
            "Trí tuệ nhân tạo",
            "Kỹ sư điện – điện tử",
            "Cơ khí – tự động hóa",
            "Kỹ thuật ô tô",
            "Kỹ thuật xây dựng",
            "Kỹ sư môi trường",
            "An ninh mạng",
            "Khoa học dữ liệu",
        ],
    ),
    (
        "Kinh tế – Tài chính – Kinh doanh",
        &[
            "Kế toán",
            "Kiểm toán",
            "Tài chính – ngân hàng",
            "Bảo hiểm",
            "Đầu tư – chứng khoán",
            "Quản trị kinh doanh",
            "Quản lý chuỗi cung ứng",
            "Thương mại điện tử",
            "Marketing – truyền thông",
            "Nhân sự",
        ],
    ),
    (
        "Y tế – Giáo dục – Xã hội",
        &[
            "Bác sĩ",
            "Dược sĩ",
            "Điều dưỡng",
            "Kỹ thuật viên y học",
            "Giáo viên – giảng viên",
            "Tư vấn giáo dục",
            "Tâm lý học",
            "Công tác xã hội",
            "Luật sư",
            "Quan hệ công chúng",
        ],
    ),
    (
        "Dịch vụ – Du lịch – Giải trí",
        &[
            "Du lịch – lữ hành",
            "Nhà hàng – khách sạn",
            "Tiếp viên hàng không",
            "Tổ chức sự kiện",
            "Hướng dẫn viên du lịch",
            "Thiết kế đồ họa",
            "Thiết kế thời trang",
            "Biên tập nội dung số",
            "Sản xuất video",
            "Truyền thông xã hội",
        ],
    ),
    (
        "Lao động kỹ năng – Thẩm mỹ – Sáng tạo",
        &[
            "Thẩm mỹ – làm đẹp",
            "Chăm sóc sắc đẹp",
            "Nghệ thuật biểu diễn",
            "Nhiếp ảnh",
            "Làm phim",
            "Công nghệ thực phẩm",
            "Kiến trúc",
            "Ngôn ngữ học",
            "Hành chính – thư ký",
            "Quân đội – công an",
        ],
    ),
];

/// Maps free-text profession labels onto coarse categories.
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    label_to_category: FxHashMap<String, String>,
}

impl CategoryResolver {
    pub fn new(groups: &[(&str, &[&str])]) -> Self {
        let mut label_to_category = FxHashMap::default();

        for &(category, members) in groups {
            // A category name is accepted as its own label.
            label_to_category.insert(norm_key(category), category.to_string());
            for member in members {
                label_to_category.insert(norm_key(member), category.to_string());
            }
        }

        Self { label_to_category }
    }

    pub fn resolve(&self, raw_label: &str) -> &str {
        self.label_to_category
            .get(&norm_key(raw_label))
            .map(String::as_str)
            .unwrap_or(UNCLASSIFIED)
    }

    pub fn len(&self) -> usize {
        self.label_to_category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_to_category.is_empty()
    }
}

impl Default for CategoryResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PROFESSION_GROUPS)
    }
}
