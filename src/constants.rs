/// Default portal root, every relative path is joined to it
pub const DEFAULT_BASE_URL: &str = "https://ent.iledefrance.fr/";
/// User agent string sent with every request
pub const USER_AGENT: &str = "ent-client/0.1.0";
/// Cookie set by the portal on successful login
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header echoing the CSRF cookie on state-changing calls
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";
/// Login endpoint, relative to the base URL
pub const LOGIN_PATH: &str = "auth/login";
/// Number of mails returned by one page of `zimbra/list`
pub const MAIL_PAGE_SIZE: usize = 10;
/// Default folder listed when none is given
pub const DEFAULT_MAIL_FOLDER: &str = "/Inbox";
/// Number of digits in a rack multipart boundary
pub const RACK_BOUNDARY_LENGTH: usize = 30;
/// Content type used when a deposited file cannot be identified
pub const DEFAULT_CONTENT_TYPE: &str = "text/plain";
/// Group type searched by default in the userbase
pub const DEFAULT_GROUP_TYPE: &str = "Group";
