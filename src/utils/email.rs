use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, instrument};

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;

pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send a class-invitation email carrying a register link.
    ///
    /// When SMTP is disabled in configuration the send is skipped and logged;
    /// the caller still gets the invite code back through its own response.
    #[instrument(skip(self, register_link))]
    pub async fn send_invite_email(
        &self,
        to_email: &str,
        class_name: &str,
        register_link: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            info!(to = %to_email, class = %class_name, "SMTP disabled, skipping invitation email");
            return Ok(());
        }

        let html_body = self.invite_template(class_name, register_link);
        let text_body = format!(
            "Hello,\n\n\
             You have been invited to join the class \"{}\" on Classquest.\n\n\
             Open the link below to register:\n\
             {}\n\n\
             If you weren't expecting this invitation, you can ignore this email.\n\n\
             Best regards,\n\
             Classquest Team",
            class_name, register_link
        );

        let subject = format!("Invitation to join {}", class_name);
        self.send_email(to_email, &subject, &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal(anyhow::anyhow!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn invite_template(&self, class_name: &str, register_link: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Class Invitation</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
                    <tr>
                        <td style="background-color: #16A34A; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Classquest</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <h2 style="margin: 0 0 20px 0; color: #333333; font-size: 24px;">You're invited!</h2>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Your teacher has invited you to join <strong>{}</strong> on Classquest.
                            </p>
                            <table width="100%" cellpadding="0" cellspacing="0" style="margin: 30px 0;">
                                <tr>
                                    <td align="center">
                                        <a href="{}" style="display: inline-block; padding: 14px 40px; background-color: #16A34A; color: #ffffff; text-decoration: none; border-radius: 6px; font-size: 16px; font-weight: bold;">Join the class</a>
                                    </td>
                                </tr>
                            </table>
                            <p style="margin: 0 0 10px 0; color: #666666; font-size: 14px; line-height: 1.5;">
                                Or copy and paste this link into your browser:
                            </p>
                            <p style="margin: 0 0 20px 0; color: #16A34A; font-size: 14px; word-break: break-all;">
                                {}
                            </p>
                            <p style="margin: 0; color: #666666; font-size: 14px; line-height: 1.5;">
                                If you weren't expecting this invitation, you can safely ignore this email.
                            </p>
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Classquest. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
            class_name, register_link, register_link
        )
    }
}
