//! The interactive menu.
//!
//! The menu loops until the operator quits, dispatching each choice to the command handlers. Any
//! operation that needs a deal first offers the stored deals, in storage order, with a way back.

use crate::commands::{self, Out, NO_DEALS};
use crate::error::ErrorType;
use crate::model::{NewDeal, Opinion, Price};
use crate::prompt::{Prompt, Selection};
use crate::query::{self, Listed};
use crate::validate::validate_price;
use crate::{render, DealStore, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const BACK_TO_MENU: &str = "Back to the main menu...";

/// The entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    List,
    Details,
    Search,
    Create,
    Vote,
    Delete,
    Stats,
    Quit,
}

serde_plain::derive_display_from_serialize!(MenuChoice);
serde_plain::derive_fromstr_from_deserialize!(MenuChoice);

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::List,
        MenuChoice::Details,
        MenuChoice::Search,
        MenuChoice::Create,
        MenuChoice::Vote,
        MenuChoice::Delete,
        MenuChoice::Stats,
        MenuChoice::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::List => "Show all deals (sorted by score)",
            MenuChoice::Details => "Show the details of a deal",
            MenuChoice::Search => "Search deals by category",
            MenuChoice::Create => "Create a new deal",
            MenuChoice::Vote => "Vote on a deal (good / bad)",
            MenuChoice::Delete => "Delete a deal",
            MenuChoice::Stats => "Show statistics",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Runs the interactive menu until the operator quits or input ends.
///
/// Failures inside an operation are logged and the menu carries on. Only a console failure ends
/// the loop with an error.
pub async fn menu<P>(store: &mut DealStore, prompt: &mut P) -> Result<Out<()>>
where
    P: Prompt,
{
    prompt.say(&format!(
        "==============================================\n        MINI DEALS - Bargain hunting\n\
         ==============================================\nVersion {}\n",
        env!("CARGO_PKG_VERSION")
    ))?;
    let labels: Vec<String> = MenuChoice::ALL
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    loop {
        let choice = match prompt.choose("What would you like to do?", &labels).await? {
            Some(ix) => MenuChoice::ALL[ix],
            None => MenuChoice::Quit,
        };
        debug!("Menu choice: {choice}");
        let outcome = match choice {
            MenuChoice::List => prompt.say(commands::list(store).message()),
            MenuChoice::Details => details(store, prompt).await,
            MenuChoice::Search => search(store, prompt).await,
            MenuChoice::Create => create(store, prompt).await,
            MenuChoice::Vote => vote(store, prompt).await,
            MenuChoice::Delete => delete(store, prompt).await,
            MenuChoice::Stats => prompt.say(commands::stats(store).message()),
            MenuChoice::Quit => break,
        };
        if let Err(e) = outcome {
            if e.kind() == ErrorType::Console {
                return Err(e);
            }
            error!("{e}");
        }
        prompt.say("")?;
    }
    Ok("Thanks for using Mini Deals!".into())
}

/// Lets the operator pick a stored deal. `None` means there was nothing to pick or they went back.
async fn pick<P>(store: &DealStore, prompt: &mut P, message: &str) -> Result<Option<usize>>
where
    P: Prompt,
{
    if store.is_empty() {
        prompt.say(NO_DEALS)?;
        return Ok(None);
    }
    let choices: Vec<String> = store
        .deals()
        .iter()
        .enumerate()
        .map(|(ix, deal)| render::choice(&Listed::new(ix, deal)))
        .collect();
    match prompt.select(message, &choices).await? {
        Selection::Chosen(index) => Ok(Some(index)),
        Selection::Back => {
            prompt.say(BACK_TO_MENU)?;
            Ok(None)
        }
    }
}

async fn details<P: Prompt>(store: &DealStore, prompt: &mut P) -> Result<()> {
    let Some(index) = pick(store, prompt, "Choose a deal to display:").await? else {
        return Ok(());
    };
    let out = commands::show(store, index)?;
    prompt.say(out.message())?;
    prompt.pause("Press Enter to return to the main menu...").await
}

async fn search<P: Prompt>(store: &DealStore, prompt: &mut P) -> Result<()> {
    if store.is_empty() {
        return prompt.say(NO_DEALS);
    }
    let categories = query::categories(store.deals());
    match prompt
        .select("Choose a category to display:", &categories)
        .await?
    {
        Selection::Chosen(ix) => prompt.say(commands::search(store, &categories[ix]).message()),
        Selection::Back => prompt.say(BACK_TO_MENU),
    }
}

async fn create<P: Prompt>(store: &mut DealStore, prompt: &mut P) -> Result<()> {
    let title = prompt.input("Title:").await?;
    let description = prompt.input("Description:").await?;
    let initial_price = price(prompt, "Initial price:").await?;
    let discount_price = price(prompt, "Discount price:").await?;
    let link = prompt.input("Link:").await?;
    let category = prompt.input("Category:").await?;
    let new_deal = NewDeal {
        title,
        description,
        initial_price,
        discount_price,
        link,
        category,
    };
    let out = commands::create(store, new_deal).await;
    prompt.say(out.message())
}

/// Asks for a price until a valid one is entered.
async fn price<P: Prompt>(prompt: &mut P, message: &str) -> Result<Price> {
    loop {
        let input = prompt.input(message).await?;
        match validate_price(&input) {
            Ok(price) => return Ok(price),
            Err(e) => prompt.say(&e.to_string())?,
        }
    }
}

async fn vote<P: Prompt>(store: &mut DealStore, prompt: &mut P) -> Result<()> {
    let Some(index) = pick(store, prompt, "Choose a deal to vote on:").await? else {
        return Ok(());
    };
    let opinions = [Opinion::Good, Opinion::Bad];
    let labels: Vec<String> = opinions.iter().map(|o| o.label().to_string()).collect();
    match prompt.select("What do you think of it?", &labels).await? {
        Selection::Chosen(ix) => {
            let out = commands::vote(store, index, opinions[ix]).await?;
            prompt.say(out.message())
        }
        Selection::Back => prompt.say(BACK_TO_MENU),
    }
}

async fn delete<P: Prompt>(store: &mut DealStore, prompt: &mut P) -> Result<()> {
    let Some(index) = pick(store, prompt, "Choose a deal to delete:").await? else {
        return Ok(());
    };
    let out = commands::confirm_delete(store, index, false, prompt).await?;
    prompt.say(out.message())
}
