use anyhow::Context;
use aws_sdk_sesv2::{
    self as ses,
    types::{Body, Content, Destination, EmailContent, Message},
};

static LOGIN_CODE_SUBJECT: &str = "Your sign-in code";

/// Builds the login code message
fn build_login_code_message(code: &str) -> String {
    let result = r#"<!DOCTYPE html>
<html lang="en">
   <head>
      <meta charset="utf-8">
      <meta name="viewport" content="width=device-width, initial-scale=1">
      <title>Your sign-in code</title>
   </head>
   <body style="word-break: break-word; -webkit-font-smoothing: antialiased; margin: 0; width: 100%; background-color: #f9fafb; padding: 0">
      <div role="article" aria-roledescription="email" aria-label="Your sign-in code" lang="en">
         <table style="width: 100%; font-family: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif" cellpadding="0" cellspacing="0" role="presentation">
            <tr>
               <td align="center" style="background-color: #f9fafb">
                  <table style="width: 100%; max-width: 640px; padding-left: 16px; padding-right: 16px" cellpadding="0" cellspacing="0" role="presentation">
                     <tr>
                        <td align="center">
                           <table style="width: 100%" cellpadding="0" cellspacing="0" role="presentation">
                              <tr>
                                 <td style="border-radius: 8px; background-color: #fff; padding: 56px 40px; outline-style: solid; outline-width: 1px; outline-color: #f3f4f6">
                                    <h1 style="margin-top: 0; margin-bottom: 16px; text-align: center; font-size: 28px; font-weight: 600; color: #374151">
                                       Sign in to your page
                                    </h1>
                                    <p style="margin-top: 0; margin-bottom: 32px; text-align: center; font-size: 16px; font-weight: 300; color: #374151">
                                       Enter this code to manage your profile. It expires in 10 minutes.
                                    </p>
                                    <p style="text-align: center; font-size: 36px; font-weight: 600; letter-spacing: 0.3em; color: #111827">
                                       {CODE}
                                    </p>
                                    <p style="margin-top: 32px; margin-bottom: 0; text-align: center; font-size: 14px; color: #9ca3af">
                                       If you did not request this code you can ignore this email.
                                    </p>
                                 </td>
                              </tr>
                           </table>
                        </td>
                     </tr>
                  </table>
               </td>
            </tr>
         </table>
      </div>
   </body>
</html>"#;

    result.replace("{CODE}", code)
}

pub(crate) async fn send_login_code(
    client: &ses::Client,
    from_email: &str,
    to_email: &str,
    code: &str,
) -> anyhow::Result<()> {
    let mut dest: Destination = Destination::builder().build();
    dest.to_addresses = Some(vec![to_email.to_string()]);

    let subject_content = Content::builder()
        .data(LOGIN_CODE_SUBJECT)
        .charset("UTF-8")
        .build()
        .context("building Content")?;

    let body_content = Content::builder()
        .data(build_login_code_message(code))
        .charset("UTF-8")
        .build()
        .context("building Content")?;

    let body = Body::builder().html(body_content).build();

    let msg = Message::builder()
        .subject(subject_content)
        .body(body)
        .build();

    let email_content = EmailContent::builder().simple(msg).build();

    client
        .send_email()
        .from_email_address(from_email)
        .destination(dest)
        .content(email_content)
        .send()
        .await?;

    Ok(())
}
