//! Global CSS styles for the portfolio.
//!
//! Light palette on `:root`, dark palette on `.app.dark-mode`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary: #6366f1;
  --primary-light: #818cf8;
  --accent: #ec4899;
  --accent-warm: #f59e0b;

  --bg: #fafafa;
  --surface: #ffffff;
  --border: #e5e7eb;
  --text-primary: #1f2937;
  --text-secondary: #6b7280;

  --valid: #10b981;
  --warning: #f59e0b;
  --danger: #ef4444;

  --radius: 16px;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
  --gradient: linear-gradient(135deg, var(--primary), var(--accent));

  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

.app.dark-mode {
  --bg: #0f172a;
  --surface: #1e293b;
  --border: #334155;
  --text-primary: #f1f5f9;
  --text-secondary: #94a3b8;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  scroll-behavior: smooth;
}

.app {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

/* === Navigation === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 100;
  background: var(--surface);
  border-bottom: 1px solid var(--border);
  backdrop-filter: blur(12px);
}

.nav-container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.nav-brand {
  font-weight: 700;
  font-size: 1.25rem;
  cursor: pointer;
  background: var(--gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.nav-menu {
  display: flex;
  list-style: none;
  gap: 1.25rem;
}

.nav-link {
  cursor: pointer;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.icon-btn {
  background: none;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 2.5rem;
  height: 2.5rem;
  cursor: pointer;
  color: var(--text-primary);
  font-size: 1.1rem;
  transition: transform var(--transition-fast);
}

.icon-btn:hover {
  transform: rotate(20deg) scale(1.05);
}

.mobile-toggle {
  display: none;
  flex-direction: column;
  justify-content: center;
  gap: 4px;
  padding: 0 0.6rem;
  border-radius: 8px;
}

.mobile-toggle .bar {
  display: block;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.mobile-toggle.active .bar:nth-child(1) { transform: translateY(6px) rotate(45deg); }
.mobile-toggle.active .bar:nth-child(2) { opacity: 0; }
.mobile-toggle.active .bar:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }

@media (max-width: 768px) {
  .mobile-toggle { display: flex; }

  .nav-menu {
    position: fixed;
    top: 3.75rem;
    left: -100%;
    width: 100%;
    height: calc(100vh - 3.75rem);
    flex-direction: column;
    align-items: center;
    padding-top: 2rem;
    background: var(--surface);
    transition: left var(--transition-normal);
  }

  .nav-menu.active { left: 0; }
}

/* === Sections === */
.section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section-title {
  font-size: 2.25rem;
  margin-bottom: 2rem;
  text-align: center;
}

.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
}

.hero-title {
  font-size: 3rem;
  line-height: 1.2;
}

.gradient-text {
  background: var(--gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.hero-subtitle {
  margin: 1rem 0 2rem;
  font-size: 1.2rem;
  color: var(--text-secondary);
}

.hero-buttons {
  display: flex;
  gap: 1rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.8rem 1.6rem;
  border-radius: 999px;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  border: 2px solid transparent;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.btn:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: var(--shadow);
}

.btn:disabled {
  cursor: default;
  opacity: 0.85;
}

.btn-primary {
  background: var(--gradient);
  color: #fff;
}

.btn-secondary {
  background: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

.btn-pill {
  padding: 0.45rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text-primary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-pill:hover,
.btn-pill.active {
  background: var(--gradient);
  border-color: transparent;
  color: #fff;
}

.btn-submit {
  width: 100%;
  justify-content: center;
  margin-top: 0.5rem;
}

.btn-submit.sent {
  background: var(--valid);
}

.loading-dots {
  display: flex;
  gap: 6px;
}

.loading-dots span {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: #fff;
  animation: dot-pulse 1s infinite ease-in-out;
}

.loading-dots span:nth-child(2) { animation-delay: 0.15s; }
.loading-dots span:nth-child(3) { animation-delay: 0.3s; }

@keyframes dot-pulse {
  0%, 100% { opacity: 0.3; transform: scale(0.8); }
  50% { opacity: 1; transform: scale(1); }
}

/* === Cards === */
.about-grid,
.projects-grid,
.interests-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
  gap: 1.5rem;
}

.about-card,
.project-card,
.interest-category,
.contact-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  box-shadow: var(--shadow);
}

.project-card {
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-6px);
}

.project-card.coming-soon {
  cursor: default;
  opacity: 0.7;
}

.project-image {
  font-size: 3rem;
  text-align: center;
  margin-bottom: 1rem;
}

.project-subtitle {
  color: var(--text-secondary);
}

.project-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin: 0.75rem 0;
}

.tag,
.tech-tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.7rem;
  border-radius: 999px;
  background: rgba(99, 102, 241, 0.12);
  color: var(--primary);
}

.project-status {
  font-size: 0.85rem;
  font-weight: 600;
  color: var(--valid);
}

.project-status.soon {
  color: var(--accent-warm);
}

.hover-lift {
  transition: transform var(--transition-normal);
}

.hover-lift:hover {
  transform: translateY(-4px);
}

/* === Project Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: rgba(15, 23, 42, 0.6);
  backdrop-filter: blur(4px);
  animation: fade-in var(--transition-normal);
}

.modal-content {
  position: relative;
  width: min(760px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--surface);
  border-radius: var(--radius);
  padding: 2rem;
  box-shadow: var(--shadow);
  animation: slide-up var(--transition-normal);
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  font-size: 1.5rem;
  line-height: 1;
}

.modal-header {
  display: flex;
  gap: 1.25rem;
  align-items: center;
  margin-bottom: 1.5rem;
}

.modal-icon {
  font-size: 3.5rem;
}

.modal-subtitle {
  color: var(--text-secondary);
}

.modal-meta {
  display: flex;
  gap: 1rem;
  margin-top: 0.4rem;
  font-size: 0.85rem;
}

.modal-status {
  color: var(--valid);
  font-weight: 600;
}

.modal-date {
  color: var(--text-secondary);
}

.modal-section {
  margin-top: 1.5rem;
}

.modal-section h3 {
  margin-bottom: 0.6rem;
}

.feature-list,
.challenge-list,
.outcome-list {
  padding-left: 1.25rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.modal-footer {
  margin-top: 2rem;
  padding-top: 1rem;
  border-top: 1px solid var(--border);
  font-style: italic;
  color: var(--text-secondary);
}

.modal-footer strong {
  font-style: normal;
  color: var(--text-primary);
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes slide-up {
  from { opacity: 0; transform: translateY(24px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Interests === */
.interest-filters {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.6rem;
  margin-bottom: 2rem;
}

.interest-category.reveal {
  opacity: 0;
  animation: slide-up var(--transition-normal) forwards;
}

.interest-item {
  margin-top: 0.75rem;
  padding: 0.75rem;
  border-radius: 12px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.interest-item:hover,
.interest-item:focus {
  background: rgba(99, 102, 241, 0.08);
  outline: none;
}

.interest-summary {
  display: flex;
  gap: 0.6rem;
  font-weight: 600;
}

.expandable-content {
  max-height: 0;
  overflow: hidden;
  color: var(--text-secondary);
  transition: max-height var(--transition-normal);
}

.interest-item.expanded .expandable-content {
  max-height: 10rem;
  margin-top: 0.4rem;
}

/* === Journey === */
.timeline {
  border-left: 3px solid var(--primary-light);
  padding-left: 1.5rem;
}

.timeline-item {
  display: flex;
  gap: 1rem;
  margin-bottom: 2rem;
}

.timeline-year {
  font-weight: 700;
  color: var(--primary);
  min-width: 3.5rem;
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 1.4fr;
  gap: 2rem;
}

@media (max-width: 768px) {
  .contact-content { grid-template-columns: 1fr; }
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.topic-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-top: 1rem;
}

.topic-response {
  max-height: 0;
  overflow: hidden;
  opacity: 0;
  transition: all var(--transition-normal);
}

.topic-response.show {
  max-height: 12rem;
  opacity: 1;
  margin-top: 1rem;
}

.response-content {
  display: flex;
  gap: 0.75rem;
}

.response-icon {
  font-size: 1.5rem;
}

.fun-fact {
  position: relative;
  cursor: pointer;
}

.contact-form {
  position: relative;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 2rem;
  box-shadow: var(--shadow);
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-group {
  margin-bottom: 1.25rem;
}

.form-label {
  display: block;
  font-weight: 600;
  margin-bottom: 0.4rem;
}

.bounce-icon {
  display: inline-block;
}

.bounce-icon.bouncing {
  animation: bounce 0.6s ease;
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  40% { transform: translateY(-6px); }
}

.form-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 2px solid var(--border);
  border-radius: 12px;
  background: var(--bg);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--primary);
}

.form-textarea {
  resize: vertical;
}

.char-counter {
  text-align: right;
  font-size: 0.8rem;
  margin-top: 0.25rem;
  transition: color var(--transition-fast);
}

.input-validation {
  font-size: 0.85rem;
  max-height: 0;
  opacity: 0;
  overflow: hidden;
  transition: all var(--transition-fast);
}

.input-validation.show {
  max-height: 3rem;
  opacity: 1;
  margin-top: 0.3rem;
}

.input-validation.valid { color: var(--valid); }
.input-validation.invalid { color: var(--danger); }

/* === Progress === */
.form-progress {
  margin-bottom: 1.5rem;
}

.progress-bar {
  height: 8px;
  border-radius: 999px;
  background: var(--border);
  overflow: hidden;
}

.progress-fill {
  height: 100%;
  background: var(--gradient);
  transition: width var(--transition-normal);
}

.progress-text {
  margin-top: 0.4rem;
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.form-encouragement {
  max-height: 0;
  opacity: 0;
  overflow: hidden;
  transition: all var(--transition-normal);
}

.form-encouragement.show {
  max-height: 4rem;
  opacity: 1;
  margin-top: 1rem;
}

.encouragement-message {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  font-weight: 600;
  color: var(--primary);
}

/* === Particle Bursts === */
.particle-burst {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 0;
  height: 0;
  pointer-events: none;
  z-index: 50;
}

.burst-particle {
  position: absolute;
  font-size: 1.5rem;
  animation: burst-out 2s ease-out forwards;
}

.fact-burst .burst-particle {
  font-size: 1rem;
  animation-duration: 1s;
}

@keyframes burst-out {
  from {
    opacity: 1;
    transform: translate(-50%, -50%);
  }
  to {
    opacity: 0;
    transform: translate(-50%, -50%) translate(var(--burst-x), var(--burst-y));
  }
}
"#;
