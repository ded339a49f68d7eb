//! Static category tables: seed posts, variant pools and display colors.

use super::types::{Category, Rgb};

/// Number of distinct profile avatars a post can be assigned.
pub const AVATAR_COUNT: usize = 20;

pub fn avatar_url(index: usize) -> String {
	format!(
		"https://api.dicebear.com/7.x/avataaars/svg?seed={}",
		index % AVATAR_COUNT
	)
}

/// One seed post plus the pool of variant texts that may spread from it.
#[derive(Debug)]
pub struct SeedGroup {
	pub original: &'static str,
	pub variants: &'static [&'static str],
}

#[derive(Debug)]
pub struct CategoryInfo {
	pub name: &'static str,
	pub color: Rgb,
	pub seeds: &'static [SeedGroup],
}

impl CategoryInfo {
	/// The seed group a new spread starts from.
	pub fn active_seed(&self) -> &'static SeedGroup {
		&self.seeds[0]
	}
}

pub fn category_info(category: Category) -> &'static CategoryInfo {
	&CATEGORIES[category.index()]
}

static CATEGORIES: [CategoryInfo; 3] = [
	CategoryInfo {
		name: "Health Misinformation",
		color: Rgb(220, 38, 38),
		seeds: &[SeedGroup {
			original: "🚨 New study shows common food additive linked to health issues! #Health",
			variants: HEALTH_VARIANTS,
		}],
	},
	CategoryInfo {
		name: "Political Misinformation",
		color: Rgb(37, 99, 235),
		seeds: &[SeedGroup {
			original: "🔍 Strange patterns found in voting data... something's not right",
			variants: POLITICS_VARIANTS,
		}],
	},
	CategoryInfo {
		name: "Tech Misinformation",
		color: Rgb(16, 185, 129),
		seeds: &[SeedGroup {
			original: "New phones secretly recording everything we do 📱 #Privacy",
			variants: TECHNOLOGY_VARIANTS,
		}],
	},
];

const HEALTH_VARIANTS: &[&str] = &[
	"My doctor friend confirmed this additive is dangerous! Spread the word!",
	"Big Food is poisoning us! Here's what they don't want you to know...",
	"Government REFUSES to ban toxic ingredient! Time to wake up!",
	"LEAKED documents show cover-up of additive dangers! RT before deleted!",
	"They're putting these chemicals in our food ON PURPOSE!",
	"My whole family got sick from this additive! WAKE UP!",
	"Insider reveals food industry's deadly secret agenda...",
	"Scientists who exposed the truth are being silenced!",
	"This is chemical warfare against the people! Share NOW!",
	"Breaking: Major food companies caught in massive cover-up!",
	"Former FDA employee speaks out about additive dangers!",
	"Studies being suppressed by Big Food lobbyists!",
	"Emergency: This common ingredient is in 80% of our food supply!",
	"Doctors worldwide are raising the alarm about this!",
	"They knew about the dangers for DECADES and did nothing!",
	"Alternative health experts have been warning us for years!",
	"The media won't report this because of food industry ads!",
	"Foreign countries have already banned this ingredient!",
	"Children are most at risk - parents need to know!",
	"Secret industry memo reveals shocking truth about additives!",
];

const POLITICS_VARIANTS: &[&str] = &[
	"Election worker friend saw suspicious activity during count!",
	"PROOF of manipulation found in multiple districts!",
	"Whistleblower reveals massive election scheme!",
	"They're trying to silence us! Share this everywhere!",
	"Statistical impossibilities in voting patterns exposed!",
	"Inside source confirms voting machine tampering!",
	"Foreign interference CONFIRMED by cyber experts!",
	"Leaked emails show coordinated election manipulation!",
	"Multiple witnesses coming forward with evidence!",
	"Emergency: Democracy under attack - spread this now!",
	"They're deleting the evidence as we speak!",
	"Mathematical proof of vote switching discovered!",
	"Secret midnight ballot dumps caught on camera!",
	"Former election official exposes systematic fraud!",
	"Voting machines connected to foreign servers!",
	"Poll workers testify about late-night operations!",
	"Military intelligence has proof of interference!",
	"Alternative vote count shows different winner!",
	"Breaking: Thousands of ghost voters discovered!",
	"Election integrity experts sound the alarm!",
];

const TECHNOLOGY_VARIANTS: &[&str] = &[
	"Tech insider confirms phones are always listening!",
	"Your data is being sold to foreign agencies!",
	"Phones are tracking your movements 24/7!",
	"Mass surveillance system exposed! Share before they censor!",
	"Hidden phone settings reveal constant monitoring!",
	"Ex-Silicon Valley engineer reveals spying capabilities!",
	"Smartphones secretly mining personal data at night!",
	"New update installs government tracking software!",
	"Tech companies sharing private messages with agencies!",
	"Microphone activated even when phone is off!",
	"Secret AI analyzing all your conversations!",
	"Phone cameras can be remotely activated!",
	"Your photos are being analyzed by foreign AI!",
	"Apps secretly access your data even when deleted!",
	"Emergency: New phone feature bypasses privacy settings!",
	"Whistleblower exposes massive data collection scheme!",
	"They're building profiles on everyone - wake up!",
	"Hidden code found that monitors brain patterns!",
	"5G towers amplifying phone surveillance capabilities!",
	"Breaking: Phones now recording sleep patterns!",
];
