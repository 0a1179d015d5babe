use anyhow::{bail, Result};

use crate::{
    cli::{Cli, Command},
    domain::{
        thread::Thread,
        user::{display_name, User},
    },
    infra::{clock::SystemClock, id::SystemIdGenerator, seed},
    usecases::{
        bootstrap,
        create_group::{create_group, CreateGroupCommand, CreateGroupError},
        list_threads::{get_thread, list_threads},
        send_media::{send_media, SendMediaCommand},
        send_message::{send_text_message, SendMessageError, SendTextCommand},
        start_chat::{start_direct_chat, StartChatCommand, StartChatError},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let mut context = bootstrap::bootstrap(cli.config.as_deref())?;
    let ids = SystemIdGenerator::default();
    let clock = SystemClock;
    let users = seed::user_directory();

    match cli.command_or_default() {
        Command::List => {
            for line in thread_list_lines(&list_threads(&context.repository).threads, &users) {
                println!("{line}");
            }
        }
        Command::Show { thread_id } => match get_thread(&context.repository, &thread_id) {
            Some(thread) => {
                for line in thread_detail_lines(&thread, &users) {
                    println!("{line}");
                }
            }
            None => println!("Thread not found: {thread_id}"),
        },
        Command::Send { thread, to, text } => {
            let sender_id = context.config.profile.current_user_id.clone();
            let target = match thread {
                Some(thread_id) => match get_thread(&context.repository, &thread_id) {
                    Some(thread) => Some(thread),
                    None => {
                        println!("Thread not found: {thread_id}");
                        return Ok(());
                    }
                },
                None => None,
            };
            let peer_id = match target {
                None => Some(to.unwrap_or_else(|| context.config.profile.default_peer_id.clone())),
                Some(_) => to,
            };

            match send_text_message(
                &mut context.repository,
                &ids,
                &clock,
                SendTextCommand {
                    thread: target,
                    sender_id,
                    peer_id,
                    text,
                },
            ) {
                Ok(thread) => println!(
                    "Sent. Thread {} now has {} messages, mood {}.",
                    thread.id,
                    thread.messages.len(),
                    thread.sentiment.label()
                ),
                Err(error) => bail!("cannot send message: {}", describe_send_error(&error)),
            }
        }
        Command::SendMedia { thread, to, media } => {
            let sender_id = context.config.profile.current_user_id.clone();
            let target = match thread {
                Some(thread_id) => match get_thread(&context.repository, &thread_id) {
                    Some(thread) => Some(thread),
                    None => {
                        println!("Thread not found: {thread_id}");
                        return Ok(());
                    }
                },
                None => None,
            };
            let peer_id = match target {
                None => Some(to.unwrap_or_else(|| context.config.profile.default_peer_id.clone())),
                Some(_) => to,
            };

            match send_media(
                &mut context.repository,
                &ids,
                &clock,
                SendMediaCommand {
                    thread: target,
                    sender_id,
                    peer_id,
                    media: media.into(),
                },
            ) {
                Ok(thread) => println!(
                    "Shared. Thread {} now has {} messages.",
                    thread.id,
                    thread.messages.len()
                ),
                Err(error) => bail!("cannot share media: {}", describe_send_error(&error)),
            }
        }
        Command::StartChat { peer_id } => {
            let current_user_id = context.config.profile.current_user_id.clone();

            match start_direct_chat(
                &mut context.repository,
                &ids,
                &clock,
                StartChatCommand {
                    current_user_id,
                    peer_id,
                },
            ) {
                Ok(outcome) if outcome.created => {
                    println!("Started chat {}.", outcome.thread.id)
                }
                Ok(outcome) => println!("Reopened chat {}.", outcome.thread.id),
                Err(StartChatError::SelfChat) => {
                    bail!("cannot start chat: a chat needs another participant")
                }
                Err(StartChatError::PersistUnavailable) => {
                    bail!("cannot start chat: the thread store is unavailable")
                }
            }
        }
        Command::CreateGroup { name, participants } => {
            let creator_id = context.config.profile.current_user_id.clone();

            match create_group(
                &mut context.repository,
                &ids,
                &clock,
                CreateGroupCommand {
                    creator_id,
                    name,
                    participants,
                },
            ) {
                Ok(thread) => println!(
                    "Created group {} with {} members.",
                    thread.id,
                    thread.participants.len()
                ),
                Err(error) => bail!("cannot create group: {}", describe_group_error(&error)),
            }
        }
    }

    Ok(())
}

fn describe_send_error(error: &SendMessageError) -> &'static str {
    match error {
        SendMessageError::EmptyMessage => "message text is empty",
        SendMessageError::MissingPeer => "no recipient for a fresh chat",
        SendMessageError::SelfChat => "a chat needs another participant",
        SendMessageError::SenderNotParticipant => "sender is not a participant of this thread",
        SendMessageError::PersistUnavailable => "the thread store is unavailable",
    }
}

fn describe_group_error(error: &CreateGroupError) -> &'static str {
    match error {
        CreateGroupError::EmptyName => "group name is empty",
        CreateGroupError::DuplicateParticipant => "participant listed twice",
        CreateGroupError::NoOtherParticipants => "a group needs at least one other member",
        CreateGroupError::PersistUnavailable => "the thread store is unavailable",
    }
}

fn thread_title(thread: &Thread, users: &[User]) -> String {
    match &thread.name {
        Some(name) => name.clone(),
        None => thread
            .participants
            .iter()
            .map(|id| display_name(users, id))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn thread_list_lines(threads: &[Thread], users: &[User]) -> Vec<String> {
    threads
        .iter()
        .map(|thread| {
            format!(
                "{}  {}  [{}]  {}",
                thread.id,
                thread_title(thread, users),
                thread.sentiment.label(),
                thread.last_activity.format("%Y-%m-%d %H:%M")
            )
        })
        .collect()
}

fn thread_detail_lines(thread: &Thread, users: &[User]) -> Vec<String> {
    let mut lines = vec![format!(
        "{}  [{}]  {} participants",
        thread_title(thread, users),
        thread.sentiment.label(),
        thread.participants.len()
    )];

    if let Some(summary) = &thread.summary {
        lines.push(format!("  {summary}"));
    }

    for message in &thread.messages {
        lines.push(format!(
            "{}  {}: {}",
            message.timestamp.format("%H:%M"),
            display_name(users, &message.sender_id),
            message.content
        ));
    }

    lines
}
