//! Then steps for card transition BDD scenarios.

use super::world::{BoardWorld, card_id, list, pipeline_id, stage_id};
use pipeboard::board::{
    domain::BoardView,
    ports::CardStore,
    services::{BoardSessionError, TransitionError},
};
use rstest_bdd_macros::then;

fn ids_in(view: &BoardView, stage: &str) -> Result<Vec<String>, eyre::Report> {
    let stage = stage_id(stage)?;
    Ok(view
        .cards_in(&stage)
        .iter()
        .map(|card| card.id().to_string())
        .collect())
}

fn ensure_ids(actual: &[String], expected: &[String]) -> Result<(), eyre::Report> {
    if actual != expected {
        return Err(eyre::eyre!("expected cards {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"stage "{stage}" of pipeline "{pipeline}" holds cards "{cards}""#)]
fn stage_holds_cards(
    world: &BoardWorld,
    stage: String,
    pipeline: String,
    cards: String,
) -> Result<(), eyre::Report> {
    let view = world.service.cards_by_stage(&pipeline_id(&pipeline)?)?;
    ensure_ids(&ids_in(&view, &stage)?, &list(&cards))
}

#[then(r#"stage "{stage}" of pipeline "{pipeline}" holds no cards"#)]
fn stage_holds_no_cards(
    world: &BoardWorld,
    stage: String,
    pipeline: String,
) -> Result<(), eyre::Report> {
    let view = world.service.cards_by_stage(&pipeline_id(&pipeline)?)?;
    ensure_ids(&ids_in(&view, &stage)?, &[])
}

#[then(r#"a notification reports card "{card}" moved from "{from}" to "{to}""#)]
fn notification_reports_move(
    world: &BoardWorld,
    card: String,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let notifications = world.recorder.notifications();
    let [notification] = notifications.as_slice() else {
        return Err(eyre::eyre!(
            "expected exactly one notification, found {}",
            notifications.len()
        ));
    };
    if notification.card_id != card_id(&card)?
        || notification.from_stage != stage_id(&from)?
        || notification.to_stage != stage_id(&to)?
    {
        return Err(eyre::eyre!("unexpected notification {notification:?}"));
    }
    Ok(())
}

#[then("no notification was emitted")]
fn no_notification(world: &BoardWorld) -> Result<(), eyre::Report> {
    let notifications = world.recorder.notifications();
    if !notifications.is_empty() {
        return Err(eyre::eyre!("expected no notifications, got {notifications:?}"));
    }
    Ok(())
}

#[then(r#"card "{card}" is in stage "{stage}""#)]
fn card_is_in_stage(world: &BoardWorld, card: String, stage: String) -> Result<(), eyre::Report> {
    let stored = world.cards.get(&card_id(&card)?)?;
    if stored.stage_id() != &stage_id(&stage)? {
        return Err(eyre::eyre!(
            "expected card {card} in stage {stage}, found {}",
            stored.stage_id()
        ));
    }
    Ok(())
}

#[then("the move fails with a card not found error")]
fn move_fails_with_card_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    if !matches!(result, Err(TransitionError::CardNotFound(_))) {
        return Err(eyre::eyre!("expected CardNotFound error, got {result:?}"));
    }
    Ok(())
}

#[then("the move fails with an invalid target stage error")]
fn move_fails_with_invalid_target(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    if !matches!(result, Err(TransitionError::InvalidTargetStage { .. })) {
        return Err(eyre::eyre!(
            "expected InvalidTargetStage error, got {result:?}"
        ));
    }
    Ok(())
}

#[then(r#"the visible stage "{stage}" holds cards "{cards}""#)]
fn visible_stage_holds_cards(
    world: &BoardWorld,
    stage: String,
    cards: String,
) -> Result<(), eyre::Report> {
    let visible = world.session()?.visible()?;
    ensure_ids(&ids_in(&visible, &stage)?, &list(&cards))
}

#[then(r#"the visible stage "{stage}" holds no cards"#)]
fn visible_stage_holds_no_cards(world: &BoardWorld, stage: String) -> Result<(), eyre::Report> {
    let visible = world.session()?.visible()?;
    ensure_ids(&ids_in(&visible, &stage)?, &[])
}

#[then("the switch fails with an unknown pipeline error")]
fn switch_fails_with_unknown_pipeline(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_switch_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing switch result"))?;
    if !matches!(result, Err(BoardSessionError::UnknownPipeline(_))) {
        return Err(eyre::eyre!("expected UnknownPipeline error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the board still shows pipeline "{pipeline}""#)]
fn board_still_shows(world: &BoardWorld, pipeline: String) -> Result<(), eyre::Report> {
    let expected = pipeline_id(&pipeline)?;
    let session = world.session()?;
    if session.active_pipeline() != Some(&expected) {
        return Err(eyre::eyre!(
            "expected active pipeline {expected}, found {:?}",
            session.active_pipeline()
        ));
    }
    if session.view()?.total_cards() != 1 {
        return Err(eyre::eyre!("active view changed after failed switch"));
    }
    Ok(())
}
