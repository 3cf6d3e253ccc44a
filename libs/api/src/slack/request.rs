use serde::Deserialize;

/// The slice of a Slack slash-command form that becomes a post. Slack also
/// sends token, team_id, channel_id and friends; those stay unread.
#[derive(Deserialize)]
pub struct SlashCommand {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub text: String,
}
