pub const KEY_PATH: &str = "Path";
pub const KEY_NAME: &str = "Name";
pub const KEY_WORKING_COPY_ROOT_PATH: &str = "Working Copy Root Path";
pub const KEY_URL: &str = "URL";
pub const KEY_RELATIVE_URL: &str = "Relative URL";
pub const KEY_REPOSITORY_ROOT: &str = "Repository Root";
pub const KEY_REPOSITORY_UUID: &str = "Repository UUID";
pub const KEY_REVISION: &str = "Revision";
pub const KEY_NODE_KIND: &str = "Node Kind";
pub const KEY_SCHEDULE: &str = "Schedule";
pub const KEY_LAST_CHANGED_AUTHOR: &str = "Last Changed Author";
pub const KEY_LAST_CHANGED_REV: &str = "Last Changed Rev";
pub const KEY_LAST_CHANGED_DATE: &str = "Last Changed Date";
pub const KEY_CHECKSUM: &str = "Checksum";
pub const KEY_LOCK_TOKEN: &str = "Lock Token";
pub const KEY_LOCK_OWNER: &str = "Lock Owner";
pub const KEY_LOCK_CREATED: &str = "Lock Created";

const DELIMITER: &str = ": ";

/// `svn info` 输出的单个文件状态
///
/// 所有字段都是去掉首尾空白后的原始文本，缺失的键保持为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvnInfo {
    pub path: String,
    pub name: String,
    pub working_copy_root_path: String,
    pub url: String,
    pub relative_url: String,
    pub repository_root: String,
    pub repository_uuid: String,
    pub revision: String,
    pub node_kind: String,
    pub schedule: String,
    pub last_changed_author: String,
    pub last_changed_rev: String,
    pub last_changed_date: String,
    pub checksum: String,
    pub lock_token: String,
    pub lock_owner: String,
    pub lock_created: String,
}

impl SvnInfo {
    /// 有锁定者即视为已锁定
    pub fn is_locked(&self) -> bool {
        !self.lock_owner.is_empty()
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        let field = match key {
            KEY_PATH => &mut self.path,
            KEY_NAME => &mut self.name,
            KEY_WORKING_COPY_ROOT_PATH => &mut self.working_copy_root_path,
            KEY_URL => &mut self.url,
            KEY_RELATIVE_URL => &mut self.relative_url,
            KEY_REPOSITORY_ROOT => &mut self.repository_root,
            KEY_REPOSITORY_UUID => &mut self.repository_uuid,
            KEY_REVISION => &mut self.revision,
            KEY_NODE_KIND => &mut self.node_kind,
            KEY_SCHEDULE => &mut self.schedule,
            KEY_LAST_CHANGED_AUTHOR => &mut self.last_changed_author,
            KEY_LAST_CHANGED_REV => &mut self.last_changed_rev,
            KEY_LAST_CHANGED_DATE => &mut self.last_changed_date,
            KEY_CHECKSUM => &mut self.checksum,
            KEY_LOCK_TOKEN => &mut self.lock_token,
            KEY_LOCK_OWNER => &mut self.lock_owner,
            KEY_LOCK_CREATED => &mut self.lock_created,
            _ => return None,
        };
        Some(field)
    }
}

/// 解析 `svn info` 的文本输出
///
/// 每行按第一个 `": "` 拆分为键和值；没有分隔符的行和未知的键都会被忽略。
/// 同一个键只取第一次出现的值。`\r\n` 与 `\n` 结果相同。
pub fn parse_svn_info(src: &str) -> SvnInfo {
    let mut info = SvnInfo::default();
    let mut seen: Vec<&str> = Vec::new();

    for line in src.lines() {
        // str::lines 只去掉行尾的 \r\n，孤立的 \r 留给 trim 处理
        let Some((key, value)) = line.split_once(DELIMITER) else {
            continue;
        };

        if seen.contains(&key) {
            continue;
        }

        if let Some(field) = info.field_mut(key) {
            *field = value.trim().to_string();
            seen.push(key);
        }
    }

    info
}
