mod send_login_code;

use aws_sdk_sesv2 as ses;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockSesMailer as Mailer;
#[cfg(not(test))]
pub use SesMailer as Mailer;

#[derive(Clone, Debug)]
pub struct SesMailer {
    inner: ses::Client,
    from_email: String,
}

#[cfg_attr(test, automock)]
impl SesMailer {
    pub fn new(inner: ses::Client, from_email: &str) -> Self {
        Self {
            inner,
            from_email: from_email.to_string(),
        }
    }

    /// Emails a login code to a profile owner
    #[tracing::instrument(skip(self, code))]
    pub async fn send_login_code(&self, to_email: &str, code: &str) -> anyhow::Result<()> {
        send_login_code::send_login_code(&self.inner, &self.from_email, to_email, code).await
    }
}
