use crate::entities;

// Statistics are not collected yet; these report fixed placeholders.

pub async fn get_stats() -> anyhow::Result<entities::Stats> {
    Ok(entities::Stats::default())
}

pub async fn get_games_played() -> anyhow::Result<Option<u64>> {
    Ok(None)
}

pub async fn get_players_joined() -> anyhow::Result<Option<u64>> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_placeholders() {
        let stats = get_stats().await.unwrap();
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({
                "openSource": 0,
                "design": 0,
                "lightweight": 0,
                "privacy": 0
            })
        );
        assert_eq!(get_games_played().await.unwrap(), None);
        assert_eq!(get_players_joined().await.unwrap(), None);
    }
}
