pub const DRAW_ENDPOINT: &str = "/api/draw/";
pub const NEW_ACTIVITY_ENDPOINT: &str = "/api/new-activity/";
pub const DELETE_ACTIVITY_ENDPOINT: &str = "/api/delete-activity/";

pub const DRAW_PAGE_PATH: &str = "/";
pub const BACKEND_PAGE_PATH: &str = "/backend/";

pub const CSRF_HEADER: &str = "X-CSRFToken";
pub const CSRF_META_NAME: &str = "csrf-token";
pub const CSRF_FORM_FIELD: &str = "csrfmiddlewaretoken";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub const NICKNAME_REQUIRED_ERROR: &str = "請先輸入抽獎人暱稱";
pub const CONFIG_MISSING_ERROR: &str = "尚未設定抽獎內容";
pub const DRAW_FAILED_ERROR: &str = "抽獎失敗";
pub const DRAW_NETWORK_ERROR: &str = "抽獎失敗，請稍後再試";

pub const ACTIVITY_NAME_REQUIRED_ERROR: &str = "請先輸入活動名稱";
pub const NEW_ACTIVITY_FAILED_ERROR: &str = "建立活動失敗";
pub const NEW_ACTIVITY_NETWORK_ERROR: &str = "建立活動失敗，請稍後再試";
pub const DELETE_ACTIVITY_FAILED_ERROR: &str = "刪除活動失敗";
pub const DELETE_ACTIVITY_NETWORK_ERROR: &str = "刪除活動失敗，請稍後再試";

pub const INVALID_PROBABILITY_ERROR: &str = "機率必須為不小於 0 的數字";

pub const EMPTY_HISTORY_PLACEHOLDER: &str = "尚無中獎紀錄";
pub const WIN_TITLE_PREFIX: &str = "恭喜中獎！";

pub const UNNAMED_CONFIG: &str = "未命名抽獎";
pub const CURRENT_HISTORY_HEADING: &str = "目前中獎紀錄";
pub const ACTIVITY_HISTORY_PREFIX: &str = "活動紀錄：";

pub fn delete_activity_confirm_message(activity_name: &str) -> String {
    format!("確定要刪除活動「{}」嗎？", activity_name)
}
