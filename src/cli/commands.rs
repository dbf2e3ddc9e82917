use std::num::NonZeroU32;
use std::path::Path;

use chrono::Utc;

use crate::app::{AppContext, FrontpageError, Result};
use crate::browse::{ListController, ListEvent, ListState, PostDetail};
use crate::domain::Post;

pub async fn top(
    ctx: &AppContext,
    count: Option<u32>,
    all: bool,
    hide: &[String],
    json: bool,
) -> Result<()> {
    let page_size = match count {
        Some(n) => NonZeroU32::new(n)
            .ok_or_else(|| FrontpageError::Config("--count must be at least 1".into()))?,
        None => ctx.config.listing.page_size,
    };

    let mut controller = ListController::new(ctx.repository.clone(), page_size);
    controller.dispatch(ListEvent::Refresh).await;
    check_loaded(controller.state())?;

    if all {
        controller.load_all().await;
        if let Some(message) = &controller.state().last_error {
            eprintln!("Stopped paging early: {}", message);
        }
    }

    let hidden: Vec<Post> = controller
        .state()
        .posts
        .iter()
        .filter(|post| hide.contains(&post.id))
        .cloned()
        .collect();
    for post in hidden {
        controller.dispatch(ListEvent::DismissPost(post)).await;
    }

    let state = controller.state();
    if json {
        println!("{}", serde_json::to_string_pretty(&state.posts).map_err(FrontpageError::Json)?);
        return Ok(());
    }

    if state.posts.is_empty() {
        println!("No posts");
        return Ok(());
    }

    let now = Utc::now();
    for post in &state.posts {
        print_post_line(post, now);
    }

    if state.next.is_some() {
        println!("\n{} posts shown, more available (--all)", state.posts.len());
    } else {
        println!("\n{} posts shown", state.posts.len());
    }

    Ok(())
}

pub async fn show(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let mut controller = ListController::new(ctx.repository.clone(), ctx.config.listing.page_size);
    controller.dispatch(ListEvent::Refresh).await;
    check_loaded(controller.state())?;

    let post = loop {
        if let Some(post) = controller.state().posts.iter().find(|p| p.id == id) {
            break post.clone();
        }
        if !controller.state().can_load_more() {
            return Err(FrontpageError::PostNotFound(id.to_string()));
        }
        controller.dispatch(ListEvent::LoadMore).await;
        if let Some(message) = &controller.state().last_error {
            return Err(FrontpageError::Load(message.clone()));
        }
    };

    controller.dispatch(ListEvent::SelectPost(post)).await;
    let selected = controller
        .state()
        .selected
        .as_ref()
        .ok_or_else(|| FrontpageError::PostNotFound(id.to_string()))?;
    let detail = PostDetail::new(selected, Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&detail).map_err(FrontpageError::Json)?);
        return Ok(());
    }

    println!("{}", detail.title);
    println!(
        "by {} · {} · {} comments",
        detail.author, detail.age, detail.comment_count
    );
    if let Some(text) = &detail.text {
        println!("\n{}\n", text);
    }
    if let Some(url) = &detail.external_url {
        println!("Link:     {}", url);
    }
    println!("Comments: {}", detail.reddit_url);
    if let Some(image) = detail.primary_image() {
        println!("Image:    {}", image);
        if let Some(fallback) = detail.fallback_image(image) {
            println!("          {} (fallback)", fallback);
        }
        println!("Save as:  {}", detail.image_file_name);
    }

    Ok(())
}

pub fn show_config(ctx: &AppContext, path: &Path) -> Result<()> {
    println!("Config file: {}", path.display());
    println!("  base_url     = {}", ctx.config.api.base_url);
    println!("  timeout_secs = {}", ctx.config.api.timeout_secs);
    println!("  user_agent   = {}", ctx.config.api.user_agent);
    println!("  page_size    = {}", ctx.config.listing.page_size);
    println!("  max_items    = {}", ctx.config.listing.max_items);
    Ok(())
}

fn check_loaded(state: &ListState) -> Result<()> {
    match &state.last_error {
        Some(message) if state.posts.is_empty() => Err(FrontpageError::Load(message.clone())),
        Some(message) => {
            eprintln!("Error loading page: {}", message);
            Ok(())
        }
        None => Ok(()),
    }
}

fn print_post_line(post: &Post, now: chrono::DateTime<Utc>) {
    let read_marker = if post.is_read { " " } else { "●" };
    println!("{} {}", read_marker, post.title);
    println!(
        "  {} · {} · {} comments · {}",
        post.author,
        post.relative_age(now),
        post.comment_count,
        post.id
    );
}
