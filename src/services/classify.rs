//! Static lookup tables and name classification for listing entries.
//!
//! Icon classes, type labels and descriptions are keyed by lowercased
//! extension (including the leading dot). Folder descriptions are keyed by the
//! exact directory name. Labels are zh-CN, matching the listing page.

use chrono::{DateTime, Local};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::sync::LazyLock;
use std::time::SystemTime;

pub const DIRECTORY_ICON: &str = "icon-directory";
pub const DEFAULT_ICON: &str = "icon-file";
pub const FOLDER_LABEL: &str = "文件夹";
pub const FILE_LABEL: &str = "文件";
pub const FOLDER_DESCRIPTION: &str = "文件夹";
pub const FILE_DESCRIPTION: &str = "文件";

/// Extensions that make a directory a "special folder", tried in order.
///
/// Multi-part suffixes come first so `x.tar.gz` matches `.tar.gz`, not `.gz`.
pub const SPECIAL_FOLDER_EXTENSIONS: &[&str] = &[
    ".tar.gz", ".tar.bz2", ".tar.xz", // archives
    ".exe", ".msi", ".app", ".dmg", // executables
    ".zip", ".rar", ".7z", ".gz", ".bz2", // compressed
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", // documents
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp", ".svg", // images
    ".mp3", ".wav", ".flac", ".aac", ".ogg", // audio
    ".mp4", ".avi", ".mkv", ".mov", ".wmv", // video
    ".js", ".css", ".html", ".htm", ".php", ".py", ".java", // code
    ".ttf", ".otf", ".woff", ".woff2", // fonts
];

fn table(pairs: &[(&'static str, &'static str)]) -> IndexMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

static ICONS: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    table(&[
        (".tar.gz", "icon-archive"),
        (".tar.bz2", "icon-archive"),
        (".tar.xz", "icon-archive"),
        (".exe", "icon-executable"),
        (".msi", "icon-executable"),
        (".app", "icon-executable"),
        (".dmg", "icon-executable"),
        (".zip", "icon-archive"),
        (".rar", "icon-archive"),
        (".7z", "icon-archive"),
        (".gz", "icon-archive"),
        (".bz2", "icon-archive"),
        (".pdf", "icon-document"),
        (".doc", "icon-document"),
        (".docx", "icon-document"),
        (".xls", "icon-document"),
        (".xlsx", "icon-document"),
        (".jpg", "icon-image"),
        (".jpeg", "icon-image"),
        (".png", "icon-image"),
        (".gif", "icon-image"),
        (".bmp", "icon-image"),
        (".webp", "icon-image"),
        (".svg", "icon-image"),
        (".flac", "icon-music"),
        (".mp3", "icon-music"),
        (".wav", "icon-music"),
        (".aac", "icon-music"),
        (".ogg", "icon-music"),
        (".mp4", "icon-video"),
        (".avi", "icon-video"),
        (".mkv", "icon-video"),
        (".mov", "icon-video"),
        (".wmv", "icon-video"),
        (".js", "icon-script"),
        (".css", "icon-style"),
        (".html", "icon-html"),
        (".htm", "icon-html"),
        (".php", "icon-script"),
        (".py", "icon-script"),
        (".java", "icon-script"),
        (".ttf", "icon-font"),
        (".otf", "icon-font"),
        (".woff", "icon-font"),
        (".woff2", "icon-font"),
        (".ps1", "icon-script"),
        (".sh", "icon-script"),
        (".reg", "icon-config"),
        (".ini", "icon-config"),
        (".list", "icon-list"),
    ])
});

static TYPE_LABELS: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    table(&[
        (".js", "JavaScript 文件"),
        (".css", "样式表文件"),
        (".html", "网页文件"),
        (".png", "图片文件"),
        (".jpg", "图片文件"),
        (".jpeg", "图片文件"),
        (".webp", "图片文件"),
        (".svg", "矢量图文件"),
        (".flac", "音频文件"),
        (".mp3", "音频文件"),
        (".wav", "音频文件"),
        (".mp4", "视频文件"),
        (".avi", "视频文件"),
        (".mkv", "视频文件"),
        (".exe", "可执行文件"),
        (".zip", "压缩文件"),
        (".tar.gz", "压缩文件"),
        (".rar", "压缩文件"),
        (".ttf", "字体文件"),
        (".otf", "字体文件"),
        (".woff", "字体文件"),
        (".woff2", "字体文件"),
        (".ps1", "PowerShell 脚本"),
        (".sh", "Shell 脚本"),
        (".reg", "注册表文件"),
        (".ini", "配置文件"),
        (".list", "列表文件"),
        (".pdf", "PDF 文档"),
        (".doc", "Word 文档"),
        (".docx", "Word 文档"),
        (".xls", "Excel 表格"),
        (".xlsx", "Excel 表格"),
        (".msi", "安装程序"),
        (".app", "应用程序"),
        (".dmg", "磁盘映像"),
        (".7z", "压缩文件"),
        (".gz", "压缩文件"),
        (".bz2", "压缩文件"),
        (".gif", "图片文件"),
        (".bmp", "图片文件"),
        (".aac", "音频文件"),
        (".ogg", "音频文件"),
        (".mov", "视频文件"),
        (".wmv", "视频文件"),
        (".htm", "网页文件"),
        (".php", "PHP 脚本"),
        (".py", "Python 脚本"),
        (".java", "Java 文件"),
    ])
});

static DESCRIPTIONS: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    table(&[
        (".js", "JavaScript 脚本"),
        (".css", "样式表"),
        (".html", "网页"),
        (".png", "图片"),
        (".jpg", "图片"),
        (".webp", "图片"),
        (".svg", "矢量图形"),
        (".flac", "无损音频"),
        (".mp4", "视频"),
        (".exe", "应用程序"),
        (".zip", "压缩包"),
        (".tar.gz", "压缩包"),
        (".ttf", "字体"),
        (".ps1", "PowerShell 脚本"),
        (".sh", "Shell 脚本"),
        (".reg", "注册表配置"),
        (".ini", "配置文件"),
        (".list", "规则列表"),
        (".pdf", "PDF 文档"),
        (".doc", "Word 文档"),
        (".docx", "Word 文档"),
        (".xls", "Excel 表格"),
        (".xlsx", "Excel 表格"),
        (".msi", "安装程序"),
        (".app", "应用程序"),
        (".dmg", "磁盘映像"),
        (".rar", "压缩包"),
        (".7z", "压缩包"),
        (".gz", "压缩包"),
        (".bz2", "压缩包"),
        (".jpeg", "图片"),
        (".gif", "动态图片"),
        (".bmp", "位图"),
        (".mp3", "音频"),
        (".wav", "音频"),
        (".aac", "音频"),
        (".ogg", "音频"),
        (".avi", "视频"),
        (".mkv", "视频"),
        (".mov", "视频"),
        (".wmv", "视频"),
        (".htm", "网页"),
        (".php", "PHP 脚本"),
        (".py", "Python 脚本"),
        (".java", "Java 文件"),
        (".otf", "字体"),
        (".woff", "网页字体"),
        (".woff2", "网页字体"),
    ])
});

static FOLDER_DESCRIPTIONS: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        table(&[
            ("assets", "资源文件"),
            ("documents", "文档"),
            ("music", "音乐"),
            ("pictures", "图片"),
            ("softwares", "软件"),
            ("videos", "视频"),
            ("others", "其他"),
            ("scripts", "脚本"),
            ("styles", "样式"),
            ("templates", "模板"),
            ("proxy", "代理配置"),
            ("config", "配置文件"),
            ("ruleset", "规则集"),
            ("chain", "代理链"),
            ("font", "字体文件"),
            ("movie", "电影"),
            ("series", "剧集"),
            ("cartoon", "动画"),
            ("television", "电视剧"),
            ("application", "应用程序"),
            ("game", "游戏"),
            ("system", "系统"),
            ("android", "安卓"),
            ("windows", "Windows"),
            ("linux", "Linux"),
            ("apple", "苹果"),
            ("nintendo", "任天堂"),
            ("sony", "索尼"),
            ("java", "Java"),
            ("switch", "Switch"),
            ("wiiu", "Wii U"),
            ("playstation3", "PlayStation 3"),
            ("code", "代码"),
            ("network", "网络工具"),
            ("remote", "远程工具"),
            ("tool", "工具"),
        ])
    });

/// Lowercased extension of `name`, including the dot.
///
/// Returns `""` when there is no dot or the only dots are leading
/// (`.redirect`, `..`).
pub fn extension(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

/// Extension that makes a directory a special folder, if any
pub fn special_folder_extension(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    SPECIAL_FOLDER_EXTENSIONS
        .iter()
        .copied()
        .find(|ext| lower.ends_with(ext))
}

pub fn icon_for_extension(ext: &str) -> &'static str {
    ICONS.get(ext).copied().unwrap_or(DEFAULT_ICON)
}

pub fn type_label_for_extension(ext: &str) -> &'static str {
    TYPE_LABELS.get(ext).copied().unwrap_or(FILE_LABEL)
}

pub fn description_for_extension(ext: &str) -> &'static str {
    DESCRIPTIONS.get(ext).copied().unwrap_or(FILE_DESCRIPTION)
}

pub fn folder_description(name: &str) -> &'static str {
    FOLDER_DESCRIPTIONS
        .get(name)
        .copied()
        .unwrap_or(FOLDER_DESCRIPTION)
}

/// Icon, type label and description of a listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub icon_class: &'static str,
    pub type_label: &'static str,
    pub description: &'static str,
}

/// Classify an entry by name and whether it is a directory.
///
/// Directories named like files (`release.zip/`) are classified as that file
/// type; other directories get the folder icon, label and a description looked
/// up by name.
pub fn classify(name: &str, is_dir: bool) -> Classification {
    if is_dir {
        return match special_folder_extension(name) {
            Some(ext) => Classification {
                icon_class: icon_for_extension(ext),
                type_label: type_label_for_extension(ext),
                description: description_for_extension(ext),
            },
            None => Classification {
                icon_class: DIRECTORY_ICON,
                type_label: FOLDER_LABEL,
                description: folder_description(name),
            },
        };
    }

    let ext = extension(name);
    Classification {
        icon_class: icon_for_extension(&ext),
        type_label: type_label_for_extension(&ext),
        description: description_for_extension(&ext),
    }
}

/// Format a modification time as a local `YYYY/MM/DD` date
pub fn format_date(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y/%m/%d").to_string()
}

/// zh collator used to order listing names.
///
/// Han names sort by pinyin; Latin letters compare case-insensitively with
/// lowercase first on a tie.
pub fn name_collator() -> CollatorBorrowed<'static> {
    Collator::try_new(locale!("zh").into(), CollatorOptions::default())
        .expect("compiled zh collation data")
}

/// Compare two names with a one-off [`name_collator`].
///
/// Build the collator once with [`name_collator`] when sorting many names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_collator().compare(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_extension() {
        assert_eq!(extension("a.TXT"), ".txt");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension("README"), "");
        assert_eq!(extension(".redirect"), "");
        assert_eq!(extension(".."), "");
        assert_eq!(extension(".config.ini"), ".ini");
        assert_eq!(extension("trailing."), ".");
    }

    #[test]
    fn test_special_folder_prefers_multi_part_suffix() {
        assert_eq!(special_folder_extension("backup.tar.gz"), Some(".tar.gz"));
        assert_eq!(special_folder_extension("Setup.EXE"), Some(".exe"));
        assert_eq!(special_folder_extension("music"), None);
        assert_eq!(special_folder_extension("notes.list"), None);
    }

    #[test]
    fn test_classify_plain_directory() {
        let c = classify("music", true);
        assert_eq!(c.icon_class, DIRECTORY_ICON);
        assert_eq!(c.type_label, FOLDER_LABEL);
        assert_eq!(c.description, "音乐");

        let unknown = classify("misc", true);
        assert_eq!(unknown.description, FOLDER_DESCRIPTION);
    }

    #[test]
    fn test_classify_special_folder_matches_file() {
        assert_eq!(classify("release.zip", true), classify("release.zip", false));
        let c = classify("release.zip", true);
        assert_eq!(c.icon_class, "icon-archive");
        assert_eq!(c.type_label, "压缩文件");
        assert_eq!(c.description, "压缩包");
    }

    #[test]
    fn test_classify_files() {
        let script = classify("install.sh", false);
        assert_eq!(script.icon_class, "icon-script");
        assert_eq!(script.type_label, "Shell 脚本");

        let unknown = classify("data.bin", false);
        assert_eq!(unknown.icon_class, DEFAULT_ICON);
        assert_eq!(unknown.type_label, FILE_LABEL);
        assert_eq!(unknown.description, FILE_DESCRIPTION);

        let marker = classify(".redirect", false);
        assert_eq!(marker.icon_class, DEFAULT_ICON);
    }

    #[test]
    fn test_tables_are_not_aligned() {
        // .tar.xz has an icon but no label or description
        let c = classify("logs.tar.xz", true);
        assert_eq!(c.icon_class, "icon-archive");
        assert_eq!(c.type_label, FILE_LABEL);
        assert_eq!(c.description, FILE_DESCRIPTION);
    }

    #[test]
    fn test_format_date_zero_pads() {
        let time: SystemTime = Local
            .with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
            .single()
            .unwrap()
            .into();
        assert_eq!(format_date(time), "2024/03/05");
    }

    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("a.txt", "b.txt"), Ordering::Less);
        assert_eq!(compare_names("B.txt", "a.txt"), Ordering::Greater);
        assert_eq!(compare_names("a", "A"), Ordering::Less);
        assert_eq!(compare_names("_notes", "1.txt"), Ordering::Less);
        assert_eq!(compare_names("2.txt", "a.txt"), Ordering::Less);
        assert_eq!(compare_names("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_compare_names_orders_han_by_pinyin() {
        // a < zhong
        assert_eq!(compare_names("啊", "中"), Ordering::Less);
        // a li < bei jing
        assert_eq!(compare_names("阿里", "北京"), Ordering::Less);
        // yin yue < zi liao
        assert_eq!(compare_names("音乐", "资料"), Ordering::Less);
        assert_eq!(compare_names("资料", "音乐"), Ordering::Greater);
    }
}
