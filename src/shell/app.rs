use std::io::{self, BufRead, Write};

use crate::chat::{ChatRoom, User};
use crate::common::MenuChoice;

use super::input::ConsoleInput;

const MENU: &str = "Menu:
1. Create User (min 2 if none)
2. Start Chat (any 2 people can chat)
3. Exit";

/// Menu loop driving a [`ChatRoom`] from a console.
///
/// Errors from the room are reported to the operator and the menu continues.
/// Only console I/O errors end the loop early.
pub struct ChatShell<R, W> {
    room: ChatRoom,
    input: ConsoleInput<R>,
    out: W,
    sentinel: String,
}

impl<R: BufRead, W: Write> ChatShell<R, W> {
    pub fn new(room: ChatRoom, reader: R, out: W, sentinel: &str) -> Self {
        Self {
            room,
            input: ConsoleInput::new(reader),
            out,
            sentinel: sentinel.to_string(),
        }
    }

    pub fn room(&self) -> &ChatRoom {
        &self.room
    }

    pub fn into_parts(self) -> (ChatRoom, W) {
        (self.room, self.out)
    }

    /// Runs until the operator picks exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(choice) = self.prompt_token("Enter your choice: ")? else {
                log::info!("Console input closed");
                return Ok(());
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::CreateAccounts) => self.create_accounts()?,
                Some(MenuChoice::StartChat) => self.run_chat()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "Exiting...")?;
                    return Ok(());
                }
                None => writeln!(self.out, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn create_accounts(&mut self) -> io::Result<()> {
        let Some(answer) = self.prompt_token("Enter the number of users to create: ")? else {
            return Ok(());
        };
        let Ok(count) = answer.parse::<usize>() else {
            writeln!(self.out, "Error: `{answer}` is not a number of users.")?;
            return Ok(());
        };

        for _ in 0..count {
            if !self.create_account()? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when input ran out before the account was complete.
    fn create_account(&mut self) -> io::Result<bool> {
        let username = loop {
            let Some(username) = self.prompt_token("Enter a new username: ")? else {
                return Ok(false);
            };
            if !self.room.accounts().contains(&username) {
                break username;
            }
            writeln!(
                self.out,
                "Error: Username already exists. Please choose a different username."
            )?;
        };

        let Some(password) = self.prompt_token(&format!("Enter a password for {username}: "))?
        else {
            return Ok(false);
        };

        match self.room.accounts_mut().register(&username, &password) {
            Ok(()) => {
                let path = self.room.accounts().file().path().display().to_string();
                writeln!(self.out, "User profile appended to {path}")?;
                writeln!(self.out, "User {username} created successfully.")?;
            }
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }
        Ok(true)
    }

    fn run_chat(&mut self) -> io::Result<()> {
        let Some(mut first) = self.join_participant(1)? else {
            return Ok(());
        };
        let Some(mut second) = self.join_participant(2)? else {
            self.leave(&mut first)?;
            return Ok(());
        };

        loop {
            let Some(first_line) = self.take_turn(&first)? else {
                break;
            };
            let Some(second_line) = self.take_turn(&second)? else {
                break;
            };
            if first_line == self.sentinel || second_line == self.sentinel {
                break;
            }
        }

        self.room.display_history(&mut self.out)?;
        writeln!(self.out, "Chat Statistics:")?;
        writeln!(self.out, "Total Messages Sent: {}", self.room.message_count())?;

        match self.room.export_history() {
            Ok(_) => {
                let path = self.room.transcript().path().display().to_string();
                writeln!(self.out, "Chat history appended to {path}")?;
            }
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }

        self.leave(&mut first)?;
        self.leave(&mut second)
    }

    /// Prompts for credentials and joins. `None` if the join failed or input ended.
    fn join_participant(&mut self, position: usize) -> io::Result<Option<User>> {
        let Some(username) = self.prompt_token(&format!("User {position}, enter your username: "))?
        else {
            return Ok(None);
        };
        let Some(password) = self.prompt_token("Enter your password: ")? else {
            return Ok(None);
        };

        let mut user = User::new(&username, &password);
        match self.room.join(&mut user, &password) {
            Ok(()) => {
                writeln!(self.out, "{username} joined the chat (Online).")?;
                Ok(Some(user))
            }
            Err(err) => {
                writeln!(self.out, "Error: {err}")?;
                Ok(None)
            }
        }
    }

    fn take_turn(&mut self, user: &User) -> io::Result<Option<String>> {
        let Some(line) = self.prompt_line(&format!("{}, enter your message: ", user.username()))?
        else {
            return Ok(None);
        };
        if let Err(err) = self.room.record_message(user, &line) {
            writeln!(self.out, "Error: {err}")?;
        }
        Ok(Some(line))
    }

    fn leave(&mut self, user: &mut User) -> io::Result<()> {
        self.room.leave(user);
        writeln!(self.out, "{} left the chat (Offline).", user.username())
    }

    fn prompt_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;
        self.input.read_token()
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt(prompt)?;
        self.input.read_line()
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }
}
