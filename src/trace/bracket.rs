//! Bracket classification

/// The three supported bracket pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Round,
    Curly,
    Square,
}

impl BracketKind {
    pub fn opening(self) -> char {
        match self {
            BracketKind::Round => '(',
            BracketKind::Curly => '{',
            BracketKind::Square => '[',
        }
    }

    pub fn closing(self) -> char {
        match self {
            BracketKind::Round => ')',
            BracketKind::Curly => '}',
            BracketKind::Square => ']',
        }
    }
}

/// What a single input character means to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open(BracketKind),
    Close(BracketKind),
    Other,
}

/// Classify a character as an opening bracket, a closing bracket, or neither
pub fn classify(c: char) -> Token {
    match c {
        '(' => Token::Open(BracketKind::Round),
        '{' => Token::Open(BracketKind::Curly),
        '[' => Token::Open(BracketKind::Square),
        ')' => Token::Close(BracketKind::Round),
        '}' => Token::Close(BracketKind::Curly),
        ']' => Token::Close(BracketKind::Square),
        _ => Token::Other,
    }
}

/// True when `closer` closes `opener`
pub fn pairs_with(opener: char, closer: char) -> bool {
    match (classify(opener), classify(closer)) {
        (Token::Open(a), Token::Close(b)) => a == b,
        _ => false,
    }
}
