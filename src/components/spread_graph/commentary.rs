//! Per-lens analysis text for a post.
//!
//! Each lens holds an ordered rule list per category. A rule fires when the
//! post content contains any of its needles (case-sensitive); the first rule
//! that fires wins. Posts that match nothing get the category fallback, and
//! categories the lens has no rules for get the lens fallback.

use super::types::{Category, Lens, Post};

struct Rule {
	needles: &'static [&'static str],
	text: &'static str,
}

struct CategoryRules {
	category: Category,
	rules: &'static [Rule],
	fallback: &'static str,
}

struct LensRules {
	categories: &'static [CategoryRules],
	fallback: &'static str,
}

impl LensRules {
	fn lookup(&self, post: &Post) -> &'static str {
		let Some(category) = self
			.categories
			.iter()
			.find(|c| c.category == post.category)
		else {
			return self.fallback;
		};
		category
			.rules
			.iter()
			.find(|rule| rule.needles.iter().any(|n| post.content.contains(n)))
			.map_or(category.fallback, |rule| rule.text)
	}
}

/// Commentary shown in the analysis popup for `post` under `lens`.
pub fn commentary(post: &Post, lens: Lens) -> &'static str {
	let rules = match lens {
		Lens::Postman => &POSTMAN,
		Lens::Peirce => &PEIRCE,
		Lens::Nguyen => &NGUYEN,
		Lens::Leonelli => &LEONELLI,
		Lens::Descartes => &DESCARTES,
	};
	rules.lookup(post)
}

const POSTMAN: LensRules = LensRules {
	categories: &[
		CategoryRules {
			category: Category::Health,
			rules: &[
				Rule {
					needles: &["doctor friend"],
					text: "Notice how personal anecdotes from 'authority figures' are used to bypass scientific processes - a common tactic in our entertainment-focused media.",
				},
				Rule {
					needles: &["LEAKED", "cover-up"],
					text: "The dramatic language of 'leaks' and 'cover-ups' transforms health information into entertainment spectacle, prioritizing sensation over science.",
				},
				Rule {
					needles: &["Big Food"],
					text: "Complex health issues are reduced to simplistic narratives of good versus evil, characteristic of entertainment media.",
				},
				Rule {
					needles: &["WAKE UP"],
					text: "The dramatic 'wake up' call turns health information into a form of entertainment rebellion narrative.",
				},
				Rule {
					needles: &["scientists who exposed"],
					text: "Scientific process is transformed into a dramatic narrative of heroic revelation, typical of entertainment media.",
				},
				Rule {
					needles: &["chemical warfare"],
					text: "Health concerns are repackaged as dramatic warfare narratives, prioritizing entertainment value over scientific accuracy.",
				},
				Rule {
					needles: &["alternative health"],
					text: "The medium favors alternative narratives that entertain over mainstream science that informs.",
				},
				Rule {
					needles: &["emergency"],
					text: "Notice how health information is framed as urgent drama to capture attention in our entertainment-driven media.",
				},
				Rule {
					needles: &["foreign countries"],
					text: "International comparisons are simplified into dramatic narratives that ignore complex policy contexts.",
				},
				Rule {
					needles: &["media won't report"],
					text: "The narrative of media suppression creates drama while undermining legitimate health journalism.",
				},
			],
			fallback: "Health misinformation thrives in our entertainment-driven media environment where dramatic claims spread faster than scientific evidence.",
		},
		CategoryRules {
			category: Category::Politics,
			rules: &[
				Rule {
					needles: &["whistleblower"],
					text: "The 'whistleblower' narrative turns political discourse into a dramatic storyline, emphasizing entertainment over factual analysis.",
				},
				Rule {
					needles: &["PROOF", "evidence"],
					text: "Claims of 'proof' are presented as dramatic revelations rather than parts of a methodical verification process.",
				},
				Rule {
					needles: &["silence"],
					text: "The persecution narrative creates compelling drama while undermining rational political discourse.",
				},
				Rule {
					needles: &["midnight"],
					text: "Time-specific details are used to create dramatic tension, turning political process into entertainment.",
				},
				Rule {
					needles: &["military intelligence"],
					text: "Appeals to secretive authorities create dramatic intrigue while bypassing normal verification channels.",
				},
				Rule {
					needles: &["ghost voters"],
					text: "Dramatic terminology transforms mundane electoral processes into entertainment spectacle.",
				},
				Rule {
					needles: &["foreign servers"],
					text: "International intrigue is invoked for dramatic effect, overshadowing domestic electoral processes.",
				},
				Rule {
					needles: &["caught on camera"],
					text: "Visual evidence is promised as dramatic reveal, typical of entertainment media formats.",
				},
				Rule {
					needles: &["alternative vote count"],
					text: "Competing narratives are presented as dramatic conflict rather than methodological disagreement.",
				},
				Rule {
					needles: &["breaking:"],
					text: "The 'breaking news' format prioritizes immediacy and drama over verification and context.",
				},
			],
			fallback: "Political discourse has been reduced to entertainment spectacle, where emotional appeal trumps reasoned debate.",
		},
		CategoryRules {
			category: Category::Technology,
			rules: &[
				Rule {
					needles: &["listening"],
					text: "Fear of surveillance is amplified by our media's tendency to sensationalize technology's capabilities.",
				},
				Rule {
					needles: &["tracking"],
					text: "Technology fears are packaged into entertaining conspiracy narratives, disconnected from technical reality.",
				},
				Rule {
					needles: &["secretly"],
					text: "The medium promotes sensational claims about secret technological capabilities over nuanced understanding.",
				},
				Rule {
					needles: &["spying"],
					text: "Surveillance narratives are dramatized for entertainment value, obscuring real privacy concerns.",
				},
				Rule {
					needles: &["AI"],
					text: "AI capabilities are sensationalized in ways that prioritize entertainment over technical accuracy.",
				},
				Rule {
					needles: &["remote"],
					text: "Remote control narratives create dramatic tension while oversimplifying technical realities.",
				},
				Rule {
					needles: &["brain patterns"],
					text: "Neurological concepts are sensationalized into science-fiction narratives for entertainment value.",
				},
				Rule {
					needles: &["5G"],
					text: "Technical infrastructure is dramatized into entertainment narratives that ignore engineering realities.",
				},
				Rule {
					needles: &["sleep patterns"],
					text: "Personal data collection is transformed into dramatic surveillance narratives.",
				},
				Rule {
					needles: &["hidden code"],
					text: "Technical processes are mystified into entertainment narratives of hidden control.",
				},
			],
			fallback: "Technology itself shapes the message - social media's rapid-fire nature promotes sensationalism over substance.",
		},
	],
	fallback: "The medium shapes the message, often prioritizing entertainment over truth.",
};

const PEIRCE: LensRules = LensRules {
	categories: &[
		CategoryRules {
			category: Category::Health,
			rules: &[
				Rule {
					needles: &["study shows"],
					text: "What's the methodology of this study? Scientific truth requires rigorous experimental design and peer review.",
				},
				Rule {
					needles: &["doctor friend"],
					text: "Anecdotal evidence, even from medical professionals, cannot replace systematic scientific investigation.",
				},
				Rule {
					needles: &["LEAKED"],
					text: "Leaked documents require verification through established scientific channels to constitute valid evidence.",
				},
				Rule {
					needles: &["Big Food"],
					text: "This conspiratorial framing lacks falsifiable hypotheses - what specific claims can be tested?",
				},
				Rule {
					needles: &["chemical"],
					text: "Chemical interactions require precise scientific study, not vague allegations. What specific compounds? What mechanisms of action?",
				},
				Rule {
					needles: &["scientists who exposed"],
					text: "Scientific findings gain validity through peer review and replication, not dramatic exposés.",
				},
				Rule {
					needles: &["alternative health"],
					text: "Alternative treatments must meet the same standards of empirical verification as conventional medicine.",
				},
				Rule {
					needles: &["foreign countries"],
					text: "Cross-national comparisons require careful control for confounding variables and regulatory differences.",
				},
				Rule {
					needles: &["emergency"],
					text: "Urgency does not override the need for proper scientific methodology and peer review.",
				},
				Rule {
					needles: &["80%"],
					text: "Statistical claims require clear methodology: What's the sample size? Control group? Confidence interval?",
				},
			],
			fallback: "Medical claims require rigorous scientific testing - anecdotal evidence and correlation are not sufficient for establishing causation.",
		},
		CategoryRules {
			category: Category::Politics,
			rules: &[
				Rule {
					needles: &["statistical"],
					text: "Statistical claims require transparent methodology and raw data for verification - assertions alone are insufficient.",
				},
				Rule {
					needles: &["proof"],
					text: "What constitutes this 'proof'? Valid evidence must be testable and reproducible.",
				},
				Rule {
					needles: &["sources"],
					text: "Anonymous sources must be corroborated through verifiable evidence and established methodologies.",
				},
				Rule {
					needles: &["patterns"],
					text: "Pattern recognition requires statistical rigor - what's the null hypothesis? What's the p-value?",
				},
				Rule {
					needles: &["midnight"],
					text: "Temporal correlations need causal mechanisms - timing alone doesn't prove intent.",
				},
				Rule {
					needles: &["foreign"],
					text: "Claims of foreign involvement require concrete, verifiable evidence, not mere speculation.",
				},
				Rule {
					needles: &["mathematical"],
					text: "Mathematical proof requires formal demonstration, not just numerical coincidences.",
				},
				Rule {
					needles: &["cyber"],
					text: "Digital forensics demands rigorous methodology and reproducible results.",
				},
				Rule {
					needles: &["expert"],
					text: "Expert claims must be verified through peer review and empirical testing.",
				},
				Rule {
					needles: &["evidence"],
					text: "What type of evidence? How was it collected? Can it be independently verified?",
				},
			],
			fallback: "Political claims must be grounded in verifiable evidence, not mere speculation or partisan rhetoric.",
		},
		CategoryRules {
			category: Category::Technology,
			rules: &[
				Rule {
					needles: &["always listening"],
					text: "Such claims need empirical testing: What data shows devices are constantly recording? How was this verified?",
				},
				Rule {
					needles: &["tracking"],
					text: "Tracking claims require technical verification through controlled testing and peer review.",
				},
				Rule {
					needles: &["monitoring"],
					text: "What measurable evidence supports these monitoring claims? Assertions need technical validation.",
				},
				Rule {
					needles: &["AI"],
					text: "AI capabilities must be demonstrated through reproducible experiments, not speculative claims.",
				},
				Rule {
					needles: &["hidden code"],
					text: "Code analysis requires systematic review and verification - what's the evidence for these hidden functions?",
				},
				Rule {
					needles: &["remote"],
					text: "Remote access claims need technical proof: What protocols? What security vulnerabilities?",
				},
				Rule {
					needles: &["data mining"],
					text: "Data collection claims require specific technical evidence about methods and scope.",
				},
				Rule {
					needles: &["surveillance"],
					text: "Surveillance capabilities need technical verification - what specific mechanisms are being claimed?",
				},
				Rule {
					needles: &["5G"],
					text: "5G claims must be tested against established principles of electromagnetic physics.",
				},
				Rule {
					needles: &["brain patterns"],
					text: "Neurological claims require rigorous scientific validation through controlled studies.",
				},
			],
			fallback: "Technical claims need empirical verification through controlled testing and peer review.",
		},
	],
	fallback: "Without experimental validation, this remains mere speculation.",
};

const NGUYEN: LensRules = LensRules {
	categories: &[
		CategoryRules {
			category: Category::Health,
			rules: &[
				Rule {
					needles: &["They don't want you to know"],
					text: "Classic echo chamber rhetoric: creating an us-vs-them narrative that dismisses outside expertise.",
				},
				Rule {
					needles: &["wake up"],
					text: "The 'wake up' call is a common echo chamber tactic, implying special insider knowledge while dismissing mainstream sources.",
				},
				Rule {
					needles: &["Big"],
					text: "Demonizing institutions ('Big' entities) reinforces echo chamber walls by discrediting potential contrary evidence.",
				},
				Rule {
					needles: &["doctor friend"],
					text: "Echo chambers often elevate informal, unverifiable sources that confirm existing beliefs while rejecting institutional expertise.",
				},
				Rule {
					needles: &["LEAKED"],
					text: "The appeal to secret knowledge is a classic echo chamber tactic - it can't be verified by outsiders, making it immune to criticism.",
				},
				Rule {
					needles: &["alternative health"],
					text: "Alternative health communities often function as echo chambers, where skepticism of mainstream medicine reinforces group identity.",
				},
				Rule {
					needles: &["media won't report"],
					text: "By discrediting mainstream sources, echo chambers become the only trusted source of information.",
				},
				Rule {
					needles: &["scientists who exposed"],
					text: "Echo chambers often lionize 'rebel' experts who confirm their beliefs while dismissing the broader scientific consensus.",
				},
				Rule {
					needles: &["foreign countries"],
					text: "Selective use of foreign examples creates an illusion of evidence while ignoring contradicting international data.",
				},
				Rule {
					needles: &["chemical warfare"],
					text: "Extreme interpretations thrive in echo chambers where moderate voices have been systematically excluded.",
				},
			],
			fallback: "Health misinformation thrives in echo chambers where alternative medicine communities reinforce each other's beliefs while rejecting mainstream medical evidence.",
		},
		CategoryRules {
			category: Category::Politics,
			rules: &[
				Rule {
					needles: &["silence"],
					text: "Claims of silencing often serve to preemptively discredit contrary evidence within political echo chambers.",
				},
				Rule {
					needles: &["media won't report"],
					text: "Dismissing mainstream media creates a closed information loop where only confirming sources are trusted.",
				},
				Rule {
					needles: &["truth"],
					text: "Echo chambers often claim monopoly on 'truth' while systematically excluding contrary evidence.",
				},
				Rule {
					needles: &["whistleblower"],
					text: "Whistleblower narratives in echo chambers often lack the scrutiny applied to contradicting evidence.",
				},
				Rule {
					needles: &["caught on camera"],
					text: "Selective interpretation of evidence reinforces existing beliefs within the echo chamber.",
				},
				Rule {
					needles: &["military intelligence"],
					text: "Appeals to shadowy authorities are common in echo chambers - they can't be verified but confirm existing beliefs.",
				},
				Rule {
					needles: &["foreign servers"],
					text: "Complex technical claims thrive in echo chambers where expertise is selectively accepted or rejected.",
				},
				Rule {
					needles: &["breaking:"],
					text: "The urgency of 'breaking' news discourages careful evaluation, reinforcing echo chamber dynamics.",
				},
				Rule {
					needles: &["alternative vote count"],
					text: "Parallel knowledge structures emerge in echo chambers, complete with their own experts and methodologies.",
				},
				Rule {
					needles: &["ghost voters"],
					text: "Echo chambers can transform mundane irregularities into evidence of vast conspiracies.",
				},
			],
			fallback: "Political echo chambers create epistemic bubbles where opposing viewpoints are systematically filtered out and discredited.",
		},
		CategoryRules {
			category: Category::Technology,
			rules: &[
				Rule {
					needles: &["insider"],
					text: "Claims of insider knowledge create artificial authority within tech echo chambers.",
				},
				Rule {
					needles: &["They're"],
					text: "The vague 'they' creates a shadowy opponent, typical of conspiracy-focused echo chambers.",
				},
				Rule {
					needles: &["exposed"],
					text: "'Exposure' narratives in tech echo chambers often lack external verification.",
				},
				Rule {
					needles: &["listening"],
					text: "Tech echo chambers often amplify surveillance fears beyond technical realities.",
				},
				Rule {
					needles: &["AI"],
					text: "AI capabilities are often mythologized in tech echo chambers, creating unrealistic fears and expectations.",
				},
				Rule {
					needles: &["hidden code"],
					text: "Technical complexity in echo chambers often gets reinterpreted as intentional malice.",
				},
				Rule {
					needles: &["5G"],
					text: "Echo chambers can transform technical infrastructure into objects of fear through collective reinforcement.",
				},
				Rule {
					needles: &["brain patterns"],
					text: "Scientific concepts get distorted in echo chambers where technical accuracy is less valued than confirming existing fears.",
				},
				Rule {
					needles: &["remote"],
					text: "Remote access capabilities are often exaggerated in echo chambers where technical limitations are ignored.",
				},
				Rule {
					needles: &["data mining"],
					text: "Data collection concerns get amplified in echo chambers where worst-case scenarios are treated as certainties.",
				},
			],
			fallback: "Tech communities can become echo chambers where conspiracy theories about surveillance and control go unchallenged.",
		},
	],
	fallback: "Echo chambers reinforce existing beliefs while excluding contrary evidence.",
};

const LEONELLI: LensRules = LensRules {
	categories: &[
		CategoryRules {
			category: Category::Health,
			rules: &[
				Rule {
					needles: &["study shows"],
					text: "Individual studies need proper context within the broader body of medical research data.",
				},
				Rule {
					needles: &["80%"],
					text: "Statistics without proper context and methodology can mislead - what's the source and scope of this percentage?",
				},
				Rule {
					needles: &["linked to"],
					text: "Correlation claims require careful data analysis to establish causation.",
				},
				Rule {
					needles: &["doctor friend"],
					text: "Anecdotal data points cannot substitute for systematic data collection and analysis.",
				},
				Rule {
					needles: &["LEAKED"],
					text: "Raw data without proper curation and methodological context can lead to misinterpretation.",
				},
				Rule {
					needles: &["worldwide"],
					text: "Global data requires careful standardization and cross-cultural validation.",
				},
				Rule {
					needles: &["scientists"],
					text: "Scientific data must be situated within its full experimental and methodological context.",
				},
				Rule {
					needles: &["evidence"],
					text: "What's the quality and completeness of the underlying dataset?",
				},
				Rule {
					needles: &["research"],
					text: "Research data requires proper documentation of collection methods and analytical procedures.",
				},
				Rule {
					needles: &["studies"],
					text: "Multiple studies need systematic meta-analysis, not cherry-picked results.",
				},
			],
			fallback: "Health data requires careful curation and context - isolated statistics can be misleading without proper medical interpretation.",
		},
		CategoryRules {
			category: Category::Politics,
			rules: &[
				Rule {
					needles: &["patterns"],
					text: "Data patterns require rigorous statistical analysis and complete datasets, not cherry-picked examples.",
				},
				Rule {
					needles: &["evidence"],
					text: "What's the quality and completeness of this evidence? Partial data can create misleading narratives.",
				},
				Rule {
					needles: &["proof"],
					text: "Claims of proof need transparent access to complete, verifiable datasets.",
				},
				Rule {
					needles: &["statistical"],
					text: "Statistical analysis requires complete datasets and transparent methodologies.",
				},
				Rule {
					needles: &["numbers"],
					text: "Raw numbers without proper context and methodology can be misleading.",
				},
				Rule {
					needles: &["analysis"],
					text: "What analytical methods were used? Are they appropriate for this type of data?",
				},
				Rule {
					needles: &["records"],
					text: "Record-keeping methodology and completeness are crucial for valid conclusions.",
				},
				Rule {
					needles: &["data shows"],
					text: "What's the broader context of this data? What collection methods were used?",
				},
				Rule {
					needles: &["confirmed"],
					text: "Confirmation requires systematic data validation and peer review.",
				},
				Rule {
					needles: &["discovered"],
					text: "New discoveries must be validated through systematic data analysis.",
				},
			],
			fallback: "Political data can be manipulated through selective presentation - we need transparent access to complete datasets.",
		},
		CategoryRules {
			category: Category::Technology,
			rules: &[
				Rule {
					needles: &["always"],
					text: "Absolute claims about technology require comprehensive data collection and analysis.",
				},
				Rule {
					needles: &["tracking"],
					text: "Technical tracking claims need precise data about methods, scope, and limitations.",
				},
				Rule {
					needles: &["monitoring"],
					text: "Monitoring claims require detailed technical data about capabilities and limitations.",
				},
				Rule {
					needles: &["data mining"],
					text: "Data mining claims need specific information about collection methods and scope.",
				},
				Rule {
					needles: &["AI"],
					text: "AI capabilities must be documented with specific technical parameters and limitations.",
				},
				Rule {
					needles: &["algorithm"],
					text: "Algorithmic claims require detailed technical documentation and validation data.",
				},
				Rule {
					needles: &["system"],
					text: "System capabilities must be verified through comprehensive technical data.",
				},
				Rule {
					needles: &["analysis"],
					text: "Technical analysis requires complete datasets and documented methodologies.",
				},
				Rule {
					needles: &["privacy"],
					text: "Privacy implications must be assessed through systematic data analysis.",
				},
				Rule {
					needles: &["security"],
					text: "Security claims require comprehensive technical documentation and testing data.",
				},
			],
			fallback: "Technical data must be evaluated within its full socio-technical context, not cherry-picked for dramatic effect.",
		},
	],
	fallback: "Data without proper context and curation can mislead rather than inform.",
};

const DESCARTES: LensRules = LensRules {
	categories: &[
		CategoryRules {
			category: Category::Health,
			rules: &[
				Rule {
					needles: &["study shows"],
					text: "Let us doubt everything except what can be clearly and distinctly proven. What foundational evidence supports this study?",
				},
				Rule {
					needles: &["doctor friend"],
					text: "Personal testimony, no matter how authoritative, must be subjected to methodical doubt. What indubitable facts support this claim?",
				},
				Rule {
					needles: &["LEAKED"],
					text: "Even seemingly concrete evidence must be doubted. How can we be certain these leaks aren't deceptive?",
				},
				Rule {
					needles: &["Big Food"],
					text: "We must strip away assumptions about institutional motives and examine only what can be proven through reason.",
				},
				Rule {
					needles: &["chemical"],
					text: "Let us break down these chemical claims into their simplest components and examine what we can know with absolute certainty.",
				},
				Rule {
					needles: &["scientists who exposed"],
					text: "Authority alone is insufficient - what clear and distinct ideas can we derive from this exposure?",
				},
				Rule {
					needles: &["alternative health"],
					text: "We must doubt both conventional and alternative approaches equally until we find indubitable truths.",
				},
				Rule {
					needles: &["emergency"],
					text: "Urgency should not override the need for methodical doubt and clear reasoning.",
				},
				Rule {
					needles: &["cover-up"],
					text: "Claims of concealment require us to examine what we can know with absolute certainty versus what we merely suspect.",
				},
				Rule {
					needles: &["evidence"],
					text: "What aspects of this evidence can withstand systematic doubt? What remains indubitably true?",
				},
			],
			fallback: "In matters of health, we must doubt everything until we reach clear and distinct ideas that cannot be doubted.",
		},
		CategoryRules {
			category: Category::Politics,
			rules: &[
				Rule {
					needles: &["patterns"],
					text: "What patterns can we establish through pure reason, setting aside all preconceptions and biases?",
				},
				Rule {
					needles: &["proof"],
					text: "What aspects of this proof can withstand systematic doubt? What foundational truths remain?",
				},
				Rule {
					needles: &["sources"],
					text: "Even trusted sources must be doubted. What can we establish through reason alone?",
				},
				Rule {
					needles: &["whistleblower"],
					text: "Let us set aside the emotional appeal and examine what can be known with mathematical certainty.",
				},
				Rule {
					needles: &["manipulation"],
					text: "Claims of manipulation require us to doubt everything except what can be clearly and distinctly proven.",
				},
				Rule {
					needles: &["foreign"],
					text: "International intrigue often clouds clear reasoning. What can we know with absolute certainty?",
				},
				Rule {
					needles: &["evidence"],
					text: "We must methodically doubt all evidence until we reach indubitable truth.",
				},
				Rule {
					needles: &["conspiracy"],
					text: "Complex theories require us to return to first principles - what can we know beyond doubt?",
				},
				Rule {
					needles: &["truth"],
					text: "Truth must be established through systematic doubt and pure reason, not mere assertion.",
				},
				Rule {
					needles: &["exposed"],
					text: "Exposures and revelations must be subjected to the same rigorous doubt as any other claim.",
				},
			],
			fallback: "Political claims must be stripped of all assumptions until we reach clear and distinct ideas.",
		},
		CategoryRules {
			category: Category::Technology,
			rules: &[
				Rule {
					needles: &["AI"],
					text: "Can we be certain about the nature of artificial intelligence? What can we know through pure reason?",
				},
				Rule {
					needles: &["listening"],
					text: "How can we be certain about surveillance claims? What evidence withstands methodical doubt?",
				},
				Rule {
					needles: &["tracking"],
					text: "Let us doubt all tracking claims until we reach indubitable technical truths.",
				},
				Rule {
					needles: &["hidden"],
					text: "Claims of hidden functionality must be subjected to systematic doubt - what can we prove with certainty?",
				},
				Rule {
					needles: &["monitoring"],
					text: "We must question all assumptions about monitoring capabilities until we reach clear and distinct ideas.",
				},
				Rule {
					needles: &["data"],
					text: "What can we know with certainty about data collection? Let us apply methodical doubt.",
				},
				Rule {
					needles: &["privacy"],
					text: "Privacy concerns must be examined through the lens of systematic doubt - what remains indubitable?",
				},
				Rule {
					needles: &["secret"],
					text: "Claims of secrecy require us to doubt everything except what can be proven through pure reason.",
				},
				Rule {
					needles: &["control"],
					text: "Let us strip away assumptions about control and examine what can be known with mathematical certainty.",
				},
				Rule {
					needles: &["system"],
					text: "We must doubt all claims about systems until we reach clear and distinct technical truths.",
				},
			],
			fallback: "Technological claims must be subjected to systematic doubt until we reach indubitable truth.",
		},
	],
	fallback: "Through methodical doubt, we must seek clear and distinct ideas that cannot be questioned.",
};
