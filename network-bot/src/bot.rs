use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use network_client::NetworkClient;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Параметры сценария нагрузки.
#[derive(Debug, Clone)]
pub(crate) struct BotConfig {
    pub(crate) server: String,
    pub(crate) users: u32,
    pub(crate) max_posts_per_user: u32,
    pub(crate) max_likes_per_user: u32,
    pub(crate) seed: Option<u64>,
}

impl BotConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.users == 0 {
            bail!("users must be at least 1");
        }
        if self.max_posts_per_user == 0 {
            bail!("max_posts_per_user must be at least 1");
        }
        Ok(())
    }
}

/// Итог выполненного сценария.
#[derive(Debug, Default)]
pub(crate) struct BotReport {
    pub(crate) users_created: u32,
    pub(crate) posts_created: u32,
    pub(crate) likes_created: u32,
    pub(crate) likes_failed: u32,
}

struct BotUser {
    client: NetworkClient,
    username: String,
    posts_to_create: u32,
    likes_to_make: u32,
}

/// Сколько постов и лайков делает каждый пользователь.
///
/// И постов, и лайков может не быть вовсе.
fn plan_tasks(rng: &mut StdRng, config: &BotConfig) -> Vec<(u32, u32)> {
    (0..config.users)
        .map(|_| {
            let posts = rng.random_range(0..=config.max_posts_per_user);
            let likes = rng.random_range(0..=config.max_likes_per_user);
            (posts, likes)
        })
        .collect()
}

/// Выбирает случайного пользователя с оставшимися задачами и списывает
/// у него одну задачу. `pending` хранит индексы пользователей, у которых
/// `remaining > 0`.
fn next_user(rng: &mut StdRng, pending: &mut Vec<usize>, remaining: &mut [u32]) -> Option<usize> {
    if pending.is_empty() {
        return None;
    }
    let slot = rng.random_range(0..pending.len());
    let index = pending[slot];
    remaining[index] -= 1;
    if remaining[index] == 0 {
        pending.swap_remove(slot);
    }
    Some(index)
}

fn pending_indices(remaining: &[u32]) -> Vec<usize> {
    remaining
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(index, _)| index)
        .collect()
}

fn random_password(rng: &mut StdRng) -> String {
    (0..16).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn unique_suffix() -> Result<String> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before unix epoch")?
        .as_nanos();
    Ok(format!("{nanos}"))
}

pub(crate) async fn run(config: &BotConfig) -> Result<BotReport> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let suffix = unique_suffix()?;
    let plan = plan_tasks(&mut rng, config);
    let mut report = BotReport::default();

    // Регистрация и вход всех пользователей.
    let mut bot_users = Vec::with_capacity(plan.len());
    for (index, (posts_to_create, likes_to_make)) in plan.into_iter().enumerate() {
        let username = format!("bot_{suffix}_{index}");
        let email = format!("{username}@example.com");
        let password = random_password(&mut rng);

        let mut client = NetworkClient::new(config.server.clone());
        client
            .signup(&username, &email, &password)
            .await
            .with_context(|| format!("signup failed for {username}"))?;
        client
            .obtain_token(&username, &password)
            .await
            .with_context(|| format!("login failed for {username}"))?;

        debug!(%username, posts_to_create, likes_to_make, "user ready");
        report.users_created += 1;
        bot_users.push(BotUser {
            client,
            username,
            posts_to_create,
            likes_to_make,
        });
    }

    // Посты публикуются по одному, каждый раз случайным пользователем
    // из тех, у кого остались задачи.
    let mut post_ids = Vec::new();
    let mut remaining: Vec<u32> = bot_users.iter().map(|user| user.posts_to_create).collect();
    let mut pending = pending_indices(&remaining);
    while let Some(index) = next_user(&mut rng, &mut pending, &mut remaining) {
        let user = &bot_users[index];
        let n = user.posts_to_create - remaining[index];
        let message = format!("post {n} from {}", user.username);
        let post = user
            .client
            .create_post(&message)
            .await
            .with_context(|| format!("create_post failed for {}", user.username))?;
        post_ids.push(post.id);
        report.posts_created += 1;
    }

    // Лайки ставятся в том же случайном порядке пользователей; дубли
    // допустимы. Неудачный лайк считается и не повторяется.
    if post_ids.is_empty() {
        warn!("no posts were created, skipping like tasks");
    } else {
        let mut remaining: Vec<u32> = bot_users.iter().map(|user| user.likes_to_make).collect();
        let mut pending = pending_indices(&remaining);
        while let Some(index) = next_user(&mut rng, &mut pending, &mut remaining) {
            let user = &bot_users[index];
            let post_id = post_ids[rng.random_range(0..post_ids.len())];
            let eval = if rng.random_bool(0.5) { "like" } else { "dislike" };
            match user.client.like_post(post_id, eval).await {
                Ok(_) => report.likes_created += 1,
                Err(err) => {
                    report.likes_failed += 1;
                    warn!(%user.username, post_id, %err, "like failed, skipping");
                }
            }
        }
    }

    info!(
        users = report.users_created,
        posts = report.posts_created,
        likes = report.likes_created,
        failed_likes = report.likes_failed,
        "bot scenario finished"
    );
    Ok(report)
}
