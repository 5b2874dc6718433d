//! Financial-literacy quiz definitions.
//!
//! Each quiz is pure data fed to the one engine; topics never carry
//! their own progression logic.

use crate::content::{OptionDef, QuizDefinition, QuizRegistry, StageDef, StageId};

/// Monthly budgeting scenarios. Five stages, 10 coins / 20 XP.
#[must_use]
pub fn budgeting() -> QuizDefinition {
    QuizDefinition::new("budget-basics", "Budget Basics")
        .with_rewards(10, 20)
        .with_reflection_prompt("Which of this month's expenses would you move between needs and wants?")
        .with_stage(
            StageDef::new(StageId::new(1), "Your allowance arrives. What is the smartest first move?", 2)
                .with_option(OptionDef::correct(
                    "a",
                    "Set aside savings before spending anything",
                    "Paying yourself first means savings happen even when the month gets messy.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "Buy the things you have been waiting for",
                    "Spending first usually leaves nothing to save at the end of the month.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Lend half to a friend who asks",
                    "Lending before planning puts your own month at risk.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Keep it all as cash in your bag",
                    "Unplanned cash tends to disappear into small purchases.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(2), "A concert ticket costs exactly your food budget for the week. You...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Buy it and figure food out later",
                    "Needs come before wants; skipping meals to fund fun backfires.",
                ))
                .with_option(OptionDef::correct(
                    "b",
                    "Skip it or find a cheaper plan with friends",
                    "A want that displaces a need is not affordable yet, whatever it costs.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Borrow the money from a classmate",
                    "Borrowing for entertainment starts a habit that gets expensive.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Use next month's allowance early",
                    "Spending next month's money today just moves the shortage forward.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(3), "What does the 50/30/20 rule suggest?", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "50% wants, 30% needs, 20% savings",
                    "Needs take the biggest share, not wants.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "50% savings, 30% needs, 20% wants",
                    "Saving half is great if you can, but the rule anchors on needs.",
                ))
                .with_option(OptionDef::correct(
                    "c",
                    "50% needs, 30% wants, 20% savings",
                    "Needs first, then wants, then a fixed slice saved every time.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Spend 50, save 30, give away 20",
                    "Generosity is good, but that is not what the rule describes.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(4), "Halfway through the month your wants budget is gone. What now?", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Dip into savings, it is your money anyway",
                    "Savings raided for wants stop being savings.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "Move money out of the food budget",
                    "Shrinking a need to feed a want flips the priorities backwards.",
                ))
                .with_option(OptionDef::correct(
                    "c",
                    "Pause spending on wants until next month",
                    "An empty wants budget is a stop sign, not a problem to engineer around.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Ask for an allowance advance",
                    "Advances make next month start already behind.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(5), "Why track small daily purchases?", 2)
                .with_option(OptionDef::correct(
                    "a",
                    "Small leaks add up to big monthly amounts",
                    "A few snacks a day can quietly outgrow any single big purchase.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "It is only worth tracking big purchases",
                    "Big purchases are rare; the dailies are where budgets actually leak.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Tracking makes you spend more confidently",
                    "The point is awareness of the total, not confidence per purchase.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Banks require you to track them",
                    "No one requires it; you do it for your own picture of the month.",
                )),
        )
}

/// OTP and phishing safety scenarios. Four stages, 10 coins / 20 XP.
#[must_use]
pub fn otp_safety() -> QuizDefinition {
    QuizDefinition::new("otp-safety", "OTP Safety")
        .with_rewards(10, 20)
        .with_reflection_prompt("Who would you tell first if a caller pressured you for a code?")
        .with_stage(
            StageDef::new(StageId::new(1), "A caller says they are from your bank and asks for the OTP just sent to you. You...", 2)
                .with_option(OptionDef::correct(
                    "a",
                    "Hang up and call the bank's official number",
                    "Banks never ask for OTPs. The code authorizes a transaction the caller started.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "Read it out, they knew your name",
                    "Scammers often know your name and number already; that proves nothing.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Ask them to call back later",
                    "Delaying keeps the door open; the call itself is the scam.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Give only the first three digits",
                    "A partial code is still your code. Share none of it.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(2), "An SMS says you won a prize and links to claim it with your card details. You...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Open the link to see if it looks real",
                    "Phishing pages look real; opening the link is the first step of the trap.",
                ))
                .with_option(OptionDef::correct(
                    "b",
                    "Delete it and report the number",
                    "Unasked-for prizes that need your card details are taking money, not giving it.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Enter an old expired card to test it",
                    "Any detail you type teaches the scammer something about you.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Forward it to friends to check together",
                    "Forwarding spreads the link; report it instead.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(3), "What does an OTP actually do?", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Proves the bank is calling you",
                    "An OTP proves nothing about who is calling; it authorizes an action.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "Unlocks your phone remotely",
                    "OTPs confirm transactions and logins, not device access.",
                ))
                .with_option(OptionDef::correct(
                    "c",
                    "Approves one specific login or transaction",
                    "Whoever types the code completes the action, so it must stay with you.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Is safe to share once it expires",
                    "Sharing codes at all builds the habit scammers rely on.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(4), "A 'support agent' asks you to install a screen-sharing app to fix your account. You...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Install it, support tools are normal",
                    "Screen sharing shows them every OTP and password as you type it.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "Install it but watch them carefully",
                    "Watching does not stop them; one glimpse of a code is enough.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Ask them to fix it on their side first",
                    "Engaging keeps the pressure on; real support never needs your screen.",
                ))
                .with_option(OptionDef::correct(
                    "d",
                    "Refuse and end the conversation",
                    "No legitimate agent needs to see your screen. Refusing ends the attack.",
                )),
        )
}

/// Loan and EMI fundamentals. Five stages, 10 coins / 20 XP.
#[must_use]
pub fn emi_basics() -> QuizDefinition {
    QuizDefinition::new("emi-basics", "EMI Basics")
        .with_rewards(10, 20)
        .with_reflection_prompt("What monthly EMI would actually fit inside your current budget?")
        .with_stage(
            StageDef::new(StageId::new(1), "What is an EMI?", 2)
                .with_option(OptionDef::correct(
                    "a",
                    "A fixed monthly repayment of a loan",
                    "Equated Monthly Installments repay principal plus interest in fixed slices.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "A one-time loan processing fee",
                    "Fees are separate; the EMI is the recurring repayment itself.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Interest the bank pays you monthly",
                    "EMIs flow from you to the lender, not the other way.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "A discount for paying in cash",
                    "EMIs are about borrowing, not discounts.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(2), "A longer loan tenure with the same amount means...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Smaller EMIs and less total interest",
                    "Smaller EMIs, yes, but interest accrues for longer, so the total grows.",
                ))
                .with_option(OptionDef::correct(
                    "b",
                    "Smaller EMIs but more total interest",
                    "Stretching repayment shrinks each installment while raising the overall cost.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Bigger EMIs and more total interest",
                    "Tenure and EMI size move in opposite directions.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "No change to either",
                    "Tenure is one of the main levers on both numbers.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(3), "A 'zero-cost EMI' offer most likely means...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "The shop is genuinely giving free credit",
                    "Someone pays for the credit; usually it is hidden in the price or fees.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "The bank waives all charges forever",
                    "Waivers are temporary and conditional; read what replaces them.",
                ))
                .with_option(OptionDef::correct(
                    "c",
                    "The cost is built into the price or fees",
                    "Discounts you would have gotten for cash often fund the 'free' interest.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "Missing a payment carries no penalty",
                    "Late fees and credit damage apply to zero-cost EMIs too.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(4), "Missing an EMI payment mainly risks...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Nothing if you pay double next month",
                    "Catching up helps, but the missed payment is already recorded.",
                ))
                .with_option(OptionDef::correct(
                    "b",
                    "Late fees and a damaged credit history",
                    "Lenders report missed EMIs; future loans get harder and pricier.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Only a polite reminder call",
                    "Reminders come first, but fees and reporting follow quickly.",
                ))
                .with_option(OptionDef::incorrect(
                    "d",
                    "The loan being cancelled quietly",
                    "Debt does not disappear when ignored; it grows.",
                )),
        )
        .with_stage(
            StageDef::new(StageId::new(5), "Before taking any EMI, the most important check is...", 2)
                .with_option(OptionDef::incorrect(
                    "a",
                    "Whether friends have the same product",
                    "Someone else's purchase says nothing about your budget.",
                ))
                .with_option(OptionDef::incorrect(
                    "b",
                    "Whether the first month is discounted",
                    "One cheap month does not change the other eleven.",
                ))
                .with_option(OptionDef::incorrect(
                    "c",
                    "Whether the shop offers delivery",
                    "Convenience is not affordability.",
                ))
                .with_option(OptionDef::correct(
                    "d",
                    "Whether the EMI fits your monthly budget",
                    "An EMI is a fixed need for its whole tenure; it must fit before you sign.",
                )),
        )
}

/// Registry preloaded with every bundled quiz.
#[must_use]
pub fn builtin_registry() -> QuizRegistry {
    let mut registry = QuizRegistry::new();
    registry.register(budgeting());
    registry.register(otp_safety());
    registry.register(emi_basics());
    registry
}
