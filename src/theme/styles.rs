//! Global CSS styles for the run card viewer.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --stage-dark: #1c1c1c;

  --card-surface: #f0f1ea;
  --card-border: #d7d8cf;

  --label-green: rgba(0, 222, 0, 0.31);
  --label-text: #ffffff;

  --text-primary: #202020;
  --text-secondary: #5a5a5a;

  --slot-placeholder: #e2e3da;
  --slot-placeholder-text: #9a9b92;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--stage-dark);
  min-height: 100vh;
}

/* === Stage === */
.card-stage {
  display: flex;
  justify-content: center;
  padding: 16px;
}

/* === Card === */
.run-card {
  width: 320px;
  padding: 12px;
  border-radius: 8px;
  border: 1px solid var(--card-border);
  background: var(--card-surface);
  color: var(--text-primary);
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);
  display: flex;
  flex-direction: column;
  gap: 14px;
}

/* === Title block === */
.run-card__title {
  text-align: center;
}

.run-card__type {
  font-size: 24px;
  font-weight: 700;
}

.run-card__date {
  margin-top: 2px;
  font-size: 18px;
}

.run-card__place {
  margin-top: 2px;
  font-size: 14px;
  color: var(--text-secondary);
}

/* === Primary row === */
.run-card__primary {
  display: flex;
  justify-content: center;
  align-items: flex-start;
  gap: 15px;
}

.run-card__portrait {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
}

.run-card__character-name {
  font-size: 20px;
  font-weight: 700;
}

.run-card__accessories {
  display: flex;
  flex-direction: column;
  gap: 10px;
}

/* === Weapons row === */
.run-card__weapons {
  display: flex;
  justify-content: space-evenly;
}

/* === Ultra block === */
.run-card__ultra {
  display: flex;
  justify-content: center;
}

/* === Mutation strip === */
.run-card__mutations {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
}

.run-card__mutation-strip {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 4px;
}

/* === Slots and images === */
.card-slot {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 4px;
}

.card-image {
  object-fit: contain;
  image-rendering: pixelated;
}

.card-image--loading {
  background: var(--slot-placeholder);
  border-radius: 4px;
  animation: pulse 1.2s ease-in-out infinite;
}

.card-image--missing {
  background: var(--slot-placeholder);
  color: var(--slot-placeholder-text);
  border-radius: 4px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.55; }
}

/* === Labels === */
.round-label {
  padding: 4px 6px;
  border-radius: 20px;
  background: var(--label-green);
  color: var(--label-text);
  font-size: 14px;
  font-weight: 700;
}

/* === Error panel === */
.card-error-panel {
  width: 320px;
  padding: 16px;
  border-radius: 8px;
  background: var(--card-surface);
  text-align: center;
}

.card-error-panel__title {
  font-size: 18px;
  font-weight: 700;
}

.card-error-panel__detail {
  margin-top: 8px;
  font-size: 14px;
  color: var(--text-secondary);
}
"#;
