#[derive(askama::Template)]
#[template(path = "contact-notification.html")]
pub struct ContactNotificationHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

#[derive(askama::Template)]
#[template(path = "contact-auto-reply.html")]
pub struct ContactAutoReplyHtmlTemplate<'a> {
    pub name: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}
