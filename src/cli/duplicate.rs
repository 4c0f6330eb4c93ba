use crate::{
    error, info,
    management::DuplicationManager,
    success,
    types::{AccessToken, PlaylistId, Username},
};

pub async fn duplicate(
    token: String,
    owner: String,
    playlist: String,
    creator: Option<String>,
) {
    let client = super::build_client(super::config_from_env());
    let token = AccessToken::new(token);

    let creator = match creator {
        Some(creator) => Username::new(creator),
        None => match client.get_user_info(&token).await {
            Ok(user) => user.id,
            Err(e) => error!("Cannot look up the current user: {}", e),
        },
    };

    info!("Duplicating playlist {} of {} for {}", playlist, owner, creator);

    let mut manager = DuplicationManager::new(&client, token);
    match manager
        .duplicate(&Username::new(owner), &creator, &PlaylistId::new(playlist))
        .await
    {
        Ok(report) => {
            success!(
                "Created {} ({}) with {} tracks",
                report.destination.name,
                report.destination.id,
                report.track_count
            );
            if let Some(snapshot) = report.snapshot_id {
                info!("Snapshot ID: {}", snapshot);
            }
        }
        Err(e) => error!("{}", e),
    }
}
