//! Global CSS styles for the Cardsmith editor.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --surface-muted: #f4f4f5;
  --border: #e4e4e7;
  --text: #18181b;
  --text-muted: #71717a;
  --accent: #2563eb;
  --accent-hover: #1d4ed8;
  --danger: #ef4444;

  --font-ui: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  --radius: 8px;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-ui);
  background: var(--surface-muted);
  color: var(--text);
  line-height: 1.5;
}

/* === Editor shell === */
.editor-page {
  padding: 2rem 1rem 3rem;
}

.editor-panel {
  max-width: 48rem;
  margin: 0 auto;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
}

.editor-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 1.5rem 1rem;
  border-bottom: 1px solid var(--border);
}

.editor-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.editor-body {
  padding: 1.5rem;
}

.editor-footer {
  display: flex;
  justify-content: flex-end;
  align-items: center;
  gap: 0.75rem;
  padding: 0 1.5rem 1.5rem;
}

.export-error {
  color: var(--danger);
  font-size: 0.875rem;
}

/* === Card stage === */
.card-stage {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  margin-top: 1rem;
}

.business-card {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-direction: column;
  padding: 1.5rem 3.5rem 1.5rem 1.5rem;
  border-radius: var(--radius);
  box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
  overflow: hidden;
  transition: all var(--transition-normal);
}

.card-content {
  display: flex;
  width: 100%;
}

.card-content--row {
  flex-direction: row;
  align-items: center;
  gap: 1.5rem;
}

.card-content--column {
  flex-direction: column;
  align-items: flex-start;
  gap: 1.5rem;
}

.card-avatar {
  position: relative;
  flex-shrink: 0;
  width: 6rem;
  height: 6rem;
}

.card-avatar__image,
.card-avatar__default {
  width: 6rem;
  height: 6rem;
  border-radius: 50%;
  object-fit: cover;
}

.card-avatar__default {
  color: currentColor;
  opacity: 0.6;
}

.card-avatar .icon-btn {
  position: absolute;
  opacity: 0;
  transition: opacity 150ms ease;
}

.card-avatar:hover .icon-btn {
  opacity: 1;
}

.card-avatar__remove {
  top: 0;
  right: 0;
  background: var(--danger);
}

.card-avatar__change {
  bottom: 0;
  right: 0;
  background: var(--accent);
}

.card-identity {
  display: flex;
  flex-direction: column;
  min-width: 0;
}

.card-content--column .card-identity {
  width: 100%;
  text-align: left;
}

.card-field--name { font-size: 1.5rem; font-weight: 700; }
.card-field--position { font-size: 1.125rem; }

.editable {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.editable .icon-btn {
  position: absolute;
  right: -2.5rem;
  opacity: 0;
  transition: opacity 150ms ease;
}

.editable:hover .icon-btn {
  opacity: 1;
}

.inline-edit-input {
  width: 100%;
  font: inherit;
  color: var(--text);
  padding: 0.125rem 0.375rem;
  border: 1px solid var(--border);
  border-radius: 4px;
}

.card-social {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  width: 100%;
  margin-top: 1rem;
  padding-top: 1rem;
  border-top: 1px solid rgba(127, 127, 127, 0.2);
}

.card-social--center { justify-content: center; }
.card-social--start { justify-content: flex-start; }

.social-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.25rem 0.5rem;
  border: 1px solid currentColor;
  border-radius: 4px;
  color: inherit;
  text-decoration: none;
  font-size: 0.875rem;
}

/* === Controls === */
.controls {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1.5rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-weight: 700;
  font-size: 0.875rem;
}

.input-hint {
  color: var(--text-muted);
  font-size: 0.8125rem;
}

.input-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  font: inherit;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--surface);
}

.input-field:focus {
  outline: 2px solid var(--accent);
  outline-offset: -1px;
}

.color-row,
.number-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.color-swatch {
  width: 2.5rem;
  height: 2.5rem;
  padding: 0.25rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: none;
}

.number-input {
  width: 5rem;
}

.theme-options {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.theme-option {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 700;
  cursor: pointer;
}

.background-thumb {
  position: relative;
  width: 5rem;
  height: 5rem;
}

.background-thumb img {
  width: 5rem;
  height: 5rem;
  object-fit: cover;
  border-radius: 6px;
}

.background-thumb .icon-btn {
  position: absolute;
  top: 0;
  right: 0;
  background: var(--danger);
}

.social-inputs {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.social-input-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.social-input-row .form-field {
  flex: 1;
}

/* === Switch === */
.switch-field {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.switch {
  position: relative;
  width: 2.5rem;
  height: 1.375rem;
  border: none;
  border-radius: 999px;
  background: var(--border);
  cursor: pointer;
  transition: background 150ms ease;
}

.switch--on {
  background: var(--accent);
}

.switch-thumb {
  position: absolute;
  top: 0.1875rem;
  left: 0.1875rem;
  width: 1rem;
  height: 1rem;
  border-radius: 50%;
  background: #fff;
  transition: transform 150ms ease;
}

.switch--on .switch-thumb {
  transform: translateX(1.125rem);
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost,
.btn-danger {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  font: inherit;
  font-size: 0.875rem;
  font-weight: 600;
  border-radius: 6px;
  cursor: pointer;
}

.btn-primary {
  color: #fff;
  background: var(--accent);
  border: 1px solid var(--accent);
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent-hover);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: wait;
}

.btn-outline {
  color: var(--text);
  background: transparent;
  border: 1px solid var(--border);
}

.btn-ghost {
  color: inherit;
  background: transparent;
  border: none;
}

.btn-danger {
  color: #fff;
  background: var(--danger);
  border: none;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 1.75rem;
  height: 1.75rem;
  border: none;
  border-radius: 50%;
  color: #fff;
  background: rgba(0, 0, 0, 0.45);
  cursor: pointer;
  font-size: 0.875rem;
}

.icon-btn:disabled {
  cursor: wait;
}
"#;
