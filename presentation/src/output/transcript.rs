//! Console transcript of a finished chat session

use chatview_application::ChatViewConfig;
use chatview_domain::{Message, SessionState};
use colored::Colorize;

/// Formats a [`SessionState`] as a readable transcript, oldest message first.
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Full transcript: title, status, messages and typing caption.
    ///
    /// Returns an empty string when the chat surface is turned off.
    pub fn format(state: &SessionState, config: &ChatViewConfig) -> String {
        if !config.is_chat_on {
            return String::new();
        }

        let mut output = String::new();

        output.push_str(&format!(
            "{}\n",
            format!("── {} ──", config.chat_title).cyan().bold()
        ));

        let caption = state.status_caption(&config.greeting, &config.no_agents);
        let caption = if state.is_online() {
            caption.green()
        } else {
            caption.yellow()
        };
        output.push_str(&format!("{}\n\n", caption));

        let visitor_id = state.visitor().map(|v| &v.id);
        for message in state.messages().rev() {
            let own = visitor_id.is_some_and(|id| message.is_authored_by(id));
            output.push_str(&Self::format_message(message, own));
            output.push('\n');
        }

        if let Some(typing) = state.typing_caption() {
            output.push_str(&format!("{}\n", typing.dimmed().italic()));
        }

        output
    }

    /// One transcript line for a message.
    pub fn format_message(message: &Message, own: bool) -> String {
        let time = message.created_at.format("%H:%M:%S").to_string();

        if message.is_system() {
            return format!("{} {}", time.dimmed(), format!("* {} *", message.text).dimmed());
        }

        let name = if own {
            format!("{} (you)", message.author_name()).green().bold()
        } else if message.author.is_none() {
            message.author_name().red().bold()
        } else {
            message.author_name().yellow().bold()
        };

        format!("{} {}: {}", time.dimmed(), name, message.text)
    }
}
