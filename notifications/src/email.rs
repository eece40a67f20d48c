use crate::config::EmailConfig;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use entities::contacts::Contact;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use use_cases::contacts::document::RenderedDocument;
use use_cases::contacts::{document_file_name, Notifier};

pub struct EmailNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    recipient: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let relay = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        }
        .with_context(|| format!("Invalid SMTP relay {}", &config.host))?;

        let credentials = Credentials::new(
            config.username.clone(),
            config.password.expose_secret().clone(),
        );
        let mailer = relay.port(config.port).credentials(credentials).build();

        let from = config
            .from
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid sender {}", &config.from))?;
        let recipient = config
            .recipient
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid recipient {}", &config.recipient))?;

        Ok(Self {
            mailer,
            from,
            recipient,
        })
    }

    fn compose(&self, contact: &Contact, attachment: Vec<u8>) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.recipient.clone())
            .subject(format!("New contact submission from {}", contact.name));

        // Replies go straight to whoever filled in the form.
        if let Some(reply_to) = contact.email().and_then(|email| email.parse::<Mailbox>().ok()) {
            builder = builder.reply_to(reply_to);
        }

        let pdf = ContentType::parse("application/pdf")
            .map_err(|err| anyhow!("Invalid attachment content type: {err:?}"))?;

        builder
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(body(contact)))
                    .singlepart(Attachment::new(document_file_name(contact)).body(attachment, pdf)),
            )
            .context("Failed to build contact email")
    }
}

fn body(contact: &Contact) -> String {
    format!(
        "You have a new contact submission.\n\nName: {}\nEmail: {}\nMessage: {}\n\nThe full submission is attached as a PDF.\n",
        contact.name,
        contact.email().unwrap_or("-"),
        contact.message().unwrap_or("-"),
    )
}

#[async_trait]
impl Notifier for EmailNotifier {
    #[tracing::instrument(err, skip(self, contact, document), fields(contact_id = %contact.id), level = "info")]
    async fn send(&self, contact: &Contact, document: &RenderedDocument) -> anyhow::Result<()> {
        let attachment = document.read().await?;
        let message = self.compose(contact, attachment)?;

        self.mailer
            .send(message)
            .await
            .context("Failed to send contact email")?;
        Ok(())
    }
}
