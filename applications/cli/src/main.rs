/// Tube CLI - interactive video playback and playlist simulator
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tube_core::{Video, VideoId};
use tube_player::{loader, PauseOutcome, PlayOutcome, Player, SearchOutcome, SelectionPrompt};

/// Sample catalog bundled into the binary, used when no file is given.
const DEFAULT_CATALOG: &str = include_str!("../videos.txt");

#[derive(Parser)]
#[command(name = "tube-cli")]
#[command(about = "Interactive video playback and playlist simulator", long_about = None)]
struct Cli {
    /// Catalog file, one `title | id | tag1,tag2,...` entry per line
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let videos = match &cli.catalog {
        Some(path) => match loader::read_catalog_file(path) {
            Ok(videos) => videos,
            // load failure is reported once; the player runs with an empty catalog
            Err(err) => {
                eprintln!("Couldn't read catalog {}: {}", path.display(), err);
                Vec::new()
            }
        },
        None => loader::read_catalog_str(DEFAULT_CATALOG),
    };
    let mut player = Player::new(videos);

    println!("Hello and welcome to Tube Player!");
    println!("Enter HELP for a list of available commands or EXIT to terminate.");

    loop {
        print!("YT> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // end of input
        }
        if !dispatch(&mut player, &line) {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Run one command line against the player. Returns false on EXIT.
fn dispatch(player: &mut Player, line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(command) = tokens.first() else {
        return true;
    };

    match command.to_uppercase().as_str() {
        "NUMBER_OF_VIDEOS" => {
            println!("{} videos in the library", player.number_of_videos());
        }
        "SHOW_ALL_VIDEOS" => show_all_videos(player),
        "PLAY" => {
            if let Some(id) = require_arg(&tokens, "PLAY <video_id>") {
                match player.play(&VideoId::new(id)) {
                    Ok(outcome) => print_play(&outcome),
                    Err(err) => println!("Cannot play video: {err}"),
                }
            }
        }
        "STOP" => match player.stop() {
            Ok(video) => println!("Stopping video: {}", video.title),
            Err(err) => println!("Cannot stop video: {err}"),
        },
        "PLAY_RANDOM" => match player.play_random() {
            Ok(outcome) => print_play(&outcome),
            Err(err) => println!("{err}"),
        },
        "PAUSE" => match player.pause() {
            Ok(PauseOutcome::Paused(video)) => println!("Pausing video: {}", video.title),
            Ok(PauseOutcome::AlreadyPaused(video)) => {
                println!("Video already paused: {}", video.title);
            }
            Err(err) => println!("Cannot pause video: {err}"),
        },
        "CONTINUE" => match player.resume() {
            Ok(video) => println!("Continuing video: {}", video.title),
            Err(err) => println!("Cannot continue video: {err}"),
        },
        "SHOW_PLAYING" => match player.show_current() {
            Ok(current) => {
                let paused = if current.paused { " - PAUSED" } else { "" };
                println!("Currently playing: {}{}", format_video(&current.video), paused);
            }
            Err(err) => println!("{err}"),
        },
        "CREATE_PLAYLIST" => {
            if let Some(name) = require_arg(&tokens, "CREATE_PLAYLIST <playlist_name>") {
                match player.create_playlist(name) {
                    Ok(title) => println!("Successfully created new playlist: {title}"),
                    Err(err) => println!("Cannot create playlist: {err}"),
                }
            }
        }
        "ADD_TO_PLAYLIST" => {
            if let Some((name, id)) =
                require_two_args(&tokens, "ADD_TO_PLAYLIST <playlist_name> <video_id>")
            {
                match player.add_to_playlist(name, &VideoId::new(id)) {
                    Ok(video) => println!("Added video to {name}: {}", video.title),
                    Err(err) => println!("Cannot add video to {name}: {err}"),
                }
            }
        }
        "REMOVE_FROM_PLAYLIST" => {
            if let Some((name, id)) =
                require_two_args(&tokens, "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")
            {
                match player.remove_from_playlist(name, &VideoId::new(id)) {
                    Ok(video) => println!("Removed video from {name}: {}", video.title),
                    Err(err) => println!("Cannot remove video from {name}: {err}"),
                }
            }
        }
        "SHOW_ALL_PLAYLISTS" => {
            let titles = player.show_all_playlists();
            if titles.is_empty() {
                println!("No playlists exist yet");
            } else {
                println!("Showing all playlists:");
                for title in titles {
                    println!("{title}");
                }
            }
        }
        "SHOW_PLAYLIST" => {
            if let Some(name) = require_arg(&tokens, "SHOW_PLAYLIST <playlist_name>") {
                match player.show_playlist(name) {
                    Ok(view) => {
                        println!("Showing playlist: {name}");
                        if view.videos.is_empty() {
                            println!("No videos here yet");
                        } else {
                            for video in &view.videos {
                                println!("{}", format_listed_video(video));
                            }
                        }
                    }
                    Err(err) => println!("Cannot show playlist {name}: {err}"),
                }
            }
        }
        "CLEAR_PLAYLIST" => {
            if let Some(name) = require_arg(&tokens, "CLEAR_PLAYLIST <playlist_name>") {
                match player.clear_playlist(name) {
                    Ok(()) => println!("Successfully removed all videos from {name}"),
                    Err(err) => println!("Cannot clear playlist {name}: {err}"),
                }
            }
        }
        "DELETE_PLAYLIST" => {
            if let Some(name) = require_arg(&tokens, "DELETE_PLAYLIST <playlist_name>") {
                match player.delete_playlist(name) {
                    Ok(()) => println!("Deleted playlist: {name}"),
                    Err(err) => println!("Cannot delete playlist {name}: {err}"),
                }
            }
        }
        "SEARCH_VIDEOS" => {
            if let Some(term) = require_arg(&tokens, "SEARCH_VIDEOS <search_term>") {
                let outcome = player.search_by_title(term, &mut StdPrompt);
                print_search(term, outcome);
            }
        }
        "SEARCH_VIDEOS_WITH_TAG" => {
            if let Some(tag) = require_arg(&tokens, "SEARCH_VIDEOS_WITH_TAG <video_tag>") {
                let outcome = player.search_by_tag(tag, &mut StdPrompt);
                print_search(tag, outcome);
            }
        }
        "FLAG_VIDEO" => {
            if let Some(id) = require_arg(&tokens, "FLAG_VIDEO <video_id> [flag_reason]") {
                let reason = (tokens.len() > 2).then(|| tokens[2..].join(" "));
                match player.flag_video(&VideoId::new(id), reason) {
                    Ok(outcome) => {
                        if let Some(stopped) = &outcome.stopped {
                            println!("Stopping video: {}", stopped.title);
                        }
                        println!(
                            "Successfully flagged video: {} (reason: {})",
                            outcome.video.title,
                            outcome.video.flag_reason().unwrap_or("Not supplied")
                        );
                    }
                    Err(err) => println!("Cannot flag video: {err}"),
                }
            }
        }
        "ALLOW_VIDEO" => {
            if let Some(id) = require_arg(&tokens, "ALLOW_VIDEO <video_id>") {
                match player.unflag_video(&VideoId::new(id)) {
                    Ok(video) => println!("Successfully removed flag from video: {}", video.title),
                    Err(err) => println!("Cannot remove flag from video: {err}"),
                }
            }
        }
        "HELP" => print_help(),
        "EXIT" => return false,
        other => {
            println!("Please enter a valid command, {other} is not recognized.");
            println!("Type HELP for a list of available commands.");
        }
    }
    true
}

fn require_arg<'a>(tokens: &[&'a str], usage: &str) -> Option<&'a str> {
    let arg = tokens.get(1).copied();
    if arg.is_none() {
        println!("Please enter {usage}");
    }
    arg
}

fn require_two_args<'a>(tokens: &[&'a str], usage: &str) -> Option<(&'a str, &'a str)> {
    match (tokens.get(1).copied(), tokens.get(2).copied()) {
        (Some(first), Some(second)) => Some((first, second)),
        _ => {
            println!("Please enter {usage}");
            None
        }
    }
}

/// `Title (id) [tag1 tag2]`
fn format_video(video: &Video) -> String {
    format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "))
}

/// Listing line with the flag marker appended for flagged entries.
fn format_listed_video(video: &Video) -> String {
    if video.is_flagged() {
        format!(
            "{} - FLAGGED (reason: {})",
            format_video(video),
            video.flag_reason().unwrap_or("Not supplied")
        )
    } else {
        format_video(video)
    }
}

fn show_all_videos(player: &Player) {
    println!("Here's a list of all available videos:");
    for video in player.list_videos() {
        println!("{}", format_listed_video(&video));
    }
}

fn print_play(outcome: &PlayOutcome) {
    if let Some(stopped) = &outcome.stopped {
        println!("Stopping video: {}", stopped.title);
    }
    println!("Playing video: {}", outcome.playing.title);
}

fn print_search(term: &str, outcome: tube_core::Result<SearchOutcome>) {
    match outcome {
        Ok(SearchOutcome::NoResults) => println!("No search results for {term}"),
        Ok(SearchOutcome::NoSelection) => println!("Nope!"),
        Ok(SearchOutcome::Played(play)) => print_play(&play),
        // unreachable in practice: search results exclude flagged videos
        Err(err) => println!("Cannot play video: {err}"),
    }
}

fn print_help() {
    println!(
        "Available commands:
    NUMBER_OF_VIDEOS                          - Lists the number of videos in the library
    SHOW_ALL_VIDEOS                           - Lists all videos, sorted by title
    PLAY <video_id>                           - Plays the specified video
    PLAY_RANDOM                               - Plays a random unflagged video
    STOP                                      - Stops the current video
    PAUSE                                     - Pauses the current video
    CONTINUE                                  - Resumes the current paused video
    SHOW_PLAYING                              - Shows the video that is currently playing
    CREATE_PLAYLIST <playlist_name>           - Creates a new (empty) playlist
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds a video to a playlist
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes a video from a playlist
    CLEAR_PLAYLIST <playlist_name>            - Removes all videos from a playlist
    DELETE_PLAYLIST <playlist_name>           - Deletes a playlist
    SHOW_ALL_PLAYLISTS                        - Lists all playlists
    SHOW_PLAYLIST <playlist_name>             - Lists the contents of a playlist
    SEARCH_VIDEOS <search_term>               - Searches video titles, then offers to play
    SEARCH_VIDEOS_WITH_TAG <video_tag>        - Searches video tags, then offers to play
    FLAG_VIDEO <video_id> [flag_reason]       - Flags a video with an optional reason
    ALLOW_VIDEO <video_id>                    - Removes the flag from a video
    HELP                                      - Displays this help
    EXIT                                      - Terminates the program"
    );
}

/// `SelectionPrompt` over stdin/stdout: print the numbered results, then
/// block for the single selection line.
struct StdPrompt;

impl SelectionPrompt for StdPrompt {
    fn present(&mut self, term: &str, results: &[&Video]) {
        println!("Here are the results for {term}:");
        for (index, video) in results.iter().enumerate() {
            println!("{}) {}", index + 1, format_video(video));
        }
        println!("Would you like to play any of the above? If yes, specify the number of the video.");
        println!("If your answer is not a valid number, we will assume it's a no.");
    }

    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf),
        }
    }
}
