mod loading;

use clap::Parser;
use ketban::Args;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PROFILES_JSON: &str = r#"[
    {"Số thứ tự": 1, "Họ và tên": "Trần Thị Bình", "Nơi ở": "Huế", "Sở thích": "Yoga;Đọc sách", "Lĩnh vực/ngành nghề": "Kế toán", "Bạn chung (ID)": "2"},
    {"Số thứ tự": 2, "Họ và tên": "Lê Văn Cường", "Nơi ở": "Hà Nội", "Sở thích": "Chạy bộ", "Bạn chung (ID)": "1, 3"},
    {"Số thứ tự": 3, "Họ và tên": "Phạm Minh Dũng", "Nơi ở": "Cần Thơ", "Sở thích": "Vẽ tranh"},
    {"id": "4", "name": "Võ Thị Em", "location": "Đà Lạt", "interests": "Làm phim"}
]"#;

pub const CONFIG_JSON: &str = r#"{
    "locations": {"Hanoi": "north", "Hà Nội": "north"},
    "bonus_config": [],
    "interest_groups": {"Nghệ thuật": ["Làm phim", "Múa"]}
}"#;

pub fn data_dir(with_config: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("profiles.json"), PROFILES_JSON).unwrap();
    if with_config {
        fs::write(dir.path().join("ketban.json"), CONFIG_JSON).unwrap();
    }
    dir
}

pub fn args_for(dir: &Path, extra: &[&str]) -> Args {
    let data_dir = dir.to_str().unwrap();
    let mut argv = vec!["ketban", "--data-dir", data_dir];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}
